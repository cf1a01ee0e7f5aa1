//! Page copy: company details, services, stats, team, testimonials, links.

use crate::icons::IconName;
use crate::scroll_spy::SectionId;

/// Company identity shown in the header, hero and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct CompanyInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub subtitle: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub founded: &'static str,
    pub experience: &'static str,
}

impl CompanyInfo {
    /// First letter of the name, used as the logo mark.
    pub fn monogram(&self) -> char {
        self.name.chars().next().unwrap_or('S')
    }

    /// `mailto:` link.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link.
    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

/// A service card in the About section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconName,
}

/// A headline number; `number` is animated by [`crate::counter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

/// A team member card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

impl TeamMember {
    /// Up to two initials for the avatar placeholder.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}

/// Highest star rating.
pub const MAX_RATING: u8 = 5;

/// A client quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Testimonial {
    pub name: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    /// Stars out of [`MAX_RATING`]
    pub rating: u8,
}

impl Testimonial {
    /// `"CEO at TechStart Inc."`
    pub fn byline(&self) -> String {
        format!("{} at {}", self.role, self.company)
    }

    /// Filled/empty flag for each of the five stars.
    pub fn stars(&self) -> [bool; MAX_RATING as usize] {
        let filled = self.rating.min(MAX_RATING);
        std::array::from_fn(|i| (i as u8) < filled)
    }
}

/// A header/footer navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavItem {
    /// Section this entry scrolls to.
    pub fn section_id(&self) -> SectionId {
        SectionId::from_anchor(self.href)
    }
}

/// A social profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: IconName,
}

/// Company identity.
pub const COMPANY_INFO: CompanyInfo = CompanyInfo {
    name: "SATI Consulting",
    tagline: "Transforming Ideas Into Digital Excellence",
    subtitle: "5+ Years of Web & Mobile Development Expertise",
    email: "info@saticonsulting.com",
    phone: "+1 (555) 123-4567",
    address: "123 Tech Street, Digital City, DC 12345",
    founded: "2019",
    experience: "5+",
};

/// Service cards.
pub const SERVICES: &[Service] = &[
    Service {
        title: "Web Development",
        description: "Modern, responsive websites built with cutting-edge technologies",
        icon: IconName::Code,
    },
    Service {
        title: "Mobile Apps",
        description: "Native and cross-platform mobile applications for iOS and Android",
        icon: IconName::Smartphone,
    },
    Service {
        title: "UI/UX Design",
        description: "User-centered design that converts visitors into customers",
        icon: IconName::Palette,
    },
    Service {
        title: "Consulting",
        description: "Strategic technology consulting to accelerate your digital transformation",
        icon: IconName::Users,
    },
];

/// Animated statistics.
pub const STATS: &[Stat] = &[
    Stat {
        number: "50+",
        label: "Projects Completed",
    },
    Stat {
        number: "5+",
        label: "Years Experience",
    },
    Stat {
        number: "95%",
        label: "Client Satisfaction",
    },
    Stat {
        number: "24/7",
        label: "Support",
    },
];

/// Team cards.
pub const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        name: "Sarah Johnson",
        role: "Lead Developer & Founder",
        bio: "Full-stack developer with 8+ years of experience in React, Node.js, and cloud architecture.",
        linkedin: "https://linkedin.com/in/sarah-johnson",
        github: "https://github.com/sarah-johnson",
    },
    TeamMember {
        name: "Alex Chen",
        role: "Mobile Development Lead",
        bio: "Expert in React Native and Flutter with a passion for creating seamless mobile experiences.",
        linkedin: "https://linkedin.com/in/alex-chen",
        github: "https://github.com/alex-chen",
    },
    TeamMember {
        name: "Maria Rodriguez",
        role: "UI/UX Designer",
        bio: "Creative designer focused on user-centered design and modern interface solutions.",
        linkedin: "https://linkedin.com/in/maria-rodriguez",
        github: "https://github.com/maria-rodriguez",
    },
    TeamMember {
        name: "David Kim",
        role: "DevOps Engineer",
        bio: "Cloud infrastructure specialist ensuring scalable and secure deployment solutions.",
        linkedin: "https://linkedin.com/in/david-kim",
        github: "https://github.com/david-kim",
    },
];

/// Carousel slides.
pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Jennifer Walsh",
        company: "TechStart Inc.",
        role: "CEO",
        content: "SATI Consulting transformed our vision into a beautiful, functional web application. Their attention to detail and technical expertise exceeded our expectations.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Brown",
        company: "Digital Solutions Ltd.",
        role: "CTO",
        content: "Working with SATI was a game-changer for our mobile app project. They delivered on time, within budget, and the quality was outstanding.",
        rating: 5,
    },
    Testimonial {
        name: "Lisa Thompson",
        company: "E-commerce Plus",
        role: "Founder",
        content: "The team at SATI Consulting helped us redesign our entire platform. The new UI/UX has significantly improved our conversion rates.",
        rating: 5,
    },
    Testimonial {
        name: "Robert Davis",
        company: "FinTech Innovations",
        role: "Product Manager",
        content: "SATI's consulting services helped us make critical technology decisions that saved us months of development time and thousands of dollars.",
        rating: 5,
    },
];

/// Header and footer navigation, in document order.
pub const NAVIGATION_ITEMS: &[NavItem] = &[
    NavItem {
        label: "About",
        href: "#about",
    },
    NavItem {
        label: "Team",
        href: "#team",
    },
    NavItem {
        label: "Testimonials",
        href: "#testimonials",
    },
    NavItem {
        label: "Contact",
        href: "#contact",
    },
];

/// Social profiles.
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/company/sati-consulting",
        icon: IconName::Linkedin,
    },
    SocialLink {
        name: "GitHub",
        url: "https://github.com/sati-consulting",
        icon: IconName::Github,
    },
    SocialLink {
        name: "Twitter",
        url: "https://twitter.com/sati_consulting",
        icon: IconName::Twitter,
    },
    SocialLink {
        name: "Instagram",
        url: "https://instagram.com/sati_consulting",
        icon: IconName::Instagram,
    },
];

/// Hero paragraph under the tagline.
pub const HERO_DESCRIPTION: &str = "We specialize in creating cutting-edge web and mobile applications that drive business growth. From concept to deployment, we deliver exceptional digital solutions tailored to your needs.";

/// About section lead.
pub const ABOUT_INTRO: &str = "With over 5 years of experience in web and mobile development, we've helped businesses transform their digital presence and achieve remarkable growth.";

/// "Our Story" paragraphs, with the founding year from [`COMPANY_INFO`].
pub fn story() -> [String; 3] {
    [
        format!(
            "Founded in {}, {} emerged from a passion for creating exceptional digital experiences. We started as a small team of developers and designers who believed that technology should be accessible, beautiful, and powerful.",
            COMPANY_INFO.founded, COMPANY_INFO.name
        ),
        "Today, we're a full-service digital consultancy that has successfully delivered over 50 projects across various industries. Our expertise spans modern web technologies, mobile app development, and strategic technology consulting.".to_string(),
        "We pride ourselves on building long-term partnerships with our clients, understanding their unique challenges, and delivering solutions that drive real business results.".to_string(),
    ]
}

/// Mission statement.
pub const MISSION: &str = "To empower businesses with innovative digital solutions that drive growth, enhance user experiences, and create lasting value in an ever-evolving digital landscape.";

/// Vision statement.
pub const VISION: &str = "To be the leading digital consultancy that bridges the gap between cutting-edge technology and business success, creating a future where innovation is accessible to all.";

/// Team section lead.
pub const TEAM_INTRO: &str = "Our diverse team of talented professionals brings together years of experience in web development, mobile apps, design, and technology consulting.";

/// "Why Our Team Makes the Difference" cards: (title, blurb).
pub const TEAM_STRENGTHS: &[(&str, &str)] = &[
    ("Expertise", "Deep technical knowledge across modern web and mobile technologies"),
    ("Collaboration", "Seamless teamwork and communication throughout every project"),
    ("Innovation", "Constantly exploring new technologies and best practices"),
];

/// Testimonials section lead.
pub const TESTIMONIALS_INTRO: &str = "Don't just take our word for it. Here's what our clients have to say about working with SATI Consulting.";

/// Contact section lead.
pub const CONTACT_INTRO: &str = "Ready to transform your ideas into digital reality? Get in touch with us today and let's discuss how we can help your business grow.";

/// "Get in touch" paragraph beside the form.
pub const CONTACT_GREETING: &str = "We'd love to hear from you. Whether you have a project in mind, need technical consulting, or just want to say hello, don't hesitate to reach out.";

/// Response-time note under the contact details.
pub const QUICK_RESPONSE: &str = "We typically respond to all inquiries within 24 hours. For urgent matters, please call us directly.";

/// Banner shown after a successful submission.
pub const SUBMIT_SUCCESS: &str = "Thank you! Your message has been sent successfully.";

/// Banner shown after a failed submission.
pub const SUBMIT_FAILURE: &str = "Sorry, there was an error sending your message. Please try again.";

/// Section ids tracked by the scroll spy, in document order.
pub fn tracked_sections() -> Vec<SectionId> {
    NAVIGATION_ITEMS.iter().map(NavItem::section_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_are_in_range() {
        for t in TESTIMONIALS {
            assert!(t.rating <= MAX_RATING, "{}", t.name);
        }
    }

    #[test]
    fn stars_follow_rating() {
        let mut t = TESTIMONIALS[0];
        t.rating = 3;
        assert_eq!(t.stars(), [true, true, true, false, false]);
        t.rating = 9;
        assert_eq!(t.stars(), [true; 5]);
    }

    #[test]
    fn byline_and_initials() {
        assert_eq!(TESTIMONIALS[1].byline(), "CTO at Digital Solutions Ltd.");
        assert_eq!(TEAM_MEMBERS[2].initials(), "MR");
        assert_eq!(COMPANY_INFO.monogram(), 'S');
    }

    #[test]
    fn story_mentions_founding_year() {
        assert!(story()[0].starts_with("Founded in 2019, SATI Consulting"));
    }

    #[test]
    fn navigation_tracks_sections_in_order() {
        let ids: Vec<String> = tracked_sections()
            .iter()
            .map(|id| id.as_str().to_string())
            .collect();
        assert_eq!(ids, ["about", "team", "testimonials", "contact"]);
    }
}
