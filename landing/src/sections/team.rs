use leptos::prelude::*;
use sati_core::content::{TEAM_INTRO, TEAM_MEMBERS, TEAM_STRENGTHS, TeamMember};
use sati_core::icons::IconName;

use super::Icon;

#[component]
pub fn Team() -> impl IntoView {
    let members = TEAM_MEMBERS
        .iter()
        .map(|member| view! { <MemberCard member=*member /> })
        .collect_view();

    let strengths = TEAM_STRENGTHS
        .iter()
        .map(|(title, blurb)| {
            let initial = title.chars().next().unwrap_or_default();
            view! {
                <div class="strength-card">
                    <div class="strength-mark">{initial}</div>
                    <h4>{*title}</h4>
                    <p>{*blurb}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="team" class="section team">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "Meet Our "
                        <span class="text-gradient">"Expert Team"</span>
                    </h2>
                    <p class="section-description">{TEAM_INTRO}</p>
                </div>
                <div class="team-grid">{members}</div>
                <div class="strengths">
                    <h3 class="subsection-title">"Why Our Team Makes the Difference"</h3>
                    <div class="strengths-grid">{strengths}</div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn MemberCard(member: TeamMember) -> impl IntoView {
    view! {
        <div class="member-card">
            <div class="member-avatar" aria-hidden="true">{member.initials()}</div>
            <h3 class="member-name">{member.name}</h3>
            <p class="member-role">{member.role}</p>
            <p class="member-bio">{member.bio}</p>
            <div class="member-social">
                <a
                    href=member.linkedin
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=format!("{} LinkedIn", member.name)
                >
                    <Icon name=IconName::Linkedin />
                </a>
                <a
                    href=member.github
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=format!("{} GitHub", member.name)
                >
                    <Icon name=IconName::Github />
                </a>
            </div>
        </div>
    }
}
