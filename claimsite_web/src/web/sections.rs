use claimsite::content::{
    Author, Hero, Impact, Innovation, Introduction, Leaderboard, Meta, Methodology, Results, Team,
};
use claimsite::nav::Section;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::diagrams::{
    NetworkTopologyDiagram, ProcessFlowDiagram, ResultsChartDiagram, TrainingLoopDiagram,
};
use super::nav::scroll_to_section;
use crate::ui_model::fade_in_style;

/// Decorative backdrop standing in for an animated scene.
#[component]
fn Backdrop(#[prop(optional, into)] caption: Option<String>) -> impl IntoView {
    view! {
        <div class="backdrop" aria-hidden="true">
            <svg viewBox="0 0 200 120" preserveAspectRatio="xMidYMid slice">
                <circle class="orb gold" cx="60" cy="55" r="22" />
                <circle class="orb grey" cx="140" cy="40" r="14" />
                <circle class="orb gold faint" cx="120" cy="85" r="9" />
                <path class="ring" d="M 20 60 Q 100 0 180 60 T 20 60" />
            </svg>
            {caption.map(|c| view! { <div class="backdrop-caption">{c}</div> })}
        </div>
    }
}

#[component]
pub(super) fn HeroSection(meta: Meta, hero: Hero) -> impl IntoView {
    view! {
        <header class="hero">
            <Backdrop />
            <div class="hero-inner">
                <div class="venue-badge">{meta.venue}" • "{meta.date}</div>
                <h1 class="hero-title">
                    {hero.title}
                    <br />
                    <span class="hero-subtitle">{hero.subtitle}</span>
                </h1>
                <p class="hero-description">{hero.description}</p>
                <a
                    class="scroll-hint"
                    href=Section::Introduction.href()
                    on:click=|e: MouseEvent| {
                        e.prevent_default();
                        scroll_to_section(Section::Introduction);
                    }
                >
                    <span>"Discover"</span>
                    <span class="arrow-down">"↓"</span>
                </a>
            </div>
        </header>
    }
}

#[component]
pub(super) fn IntroductionSection(content: Introduction) -> impl IntoView {
    view! {
        <section id=Section::Introduction.id() class="section light">
            <div class="grid">
                <div class="aside">
                    <div class="eyebrow">"Introduction"</div>
                    <h2>{content.heading}</h2>
                    <div class="rule"></div>
                </div>
                <div class="body">
                    <p class="lead">{content.first}</p>
                    <p>{content.second}</p>
                </div>
            </div>
        </section>
    }
}

#[component]
pub(super) fn LeaderboardSection(leaderboard: Leaderboard) -> impl IntoView {
    let cards = leaderboard
        .achievements
        .into_iter()
        .enumerate()
        .map(|(i, a)| {
            view! {
                <div class="achievement card" style=fade_in_style(i as u32 * 150)>
                    <div class="award">{a.award.icon()}</div>
                    <div class="rank">{a.rank}</div>
                    <h3>{a.entity}</h3>
                    <p>{a.detail}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Leaderboard.id() class="section tinted">
            <div class="centered">
                <div class="eyebrow">"Competition Results"</div>
                <h2>{leaderboard.heading}</h2>
                <p class="lead">{leaderboard.description}</p>
            </div>
            <div class="achievements">{cards}</div>
        </section>
    }
}

#[component]
pub(super) fn MethodologySection(content: Methodology) -> impl IntoView {
    view! {
        <section id=Section::Methodology.id() class="section light">
            <div class="grid two">
                <div>
                    <div class="eyebrow">"Approach"</div>
                    <h2>{content.heading}</h2>
                    <p class="lead">{content.first}</p>
                    <p>{content.second}</p>
                </div>
                <NetworkTopologyDiagram />
            </div>
        </section>
    }
}

#[component]
pub(super) fn TrainingSection() -> impl IntoView {
    view! {
        <section id=Section::Training.id() class="section tinted">
            <div class="centered">
                <div class="eyebrow">"Fine-tuning"</div>
                <h2>"Learning From Mistakes"</h2>
                <p class="lead">
                    "Each gradient step nudges FLAN-T5 from a literal restatement of the post toward the reference claim."
                </p>
            </div>
            <TrainingLoopDiagram />
        </section>
    }
}

#[component]
pub(super) fn InnovationSection(content: Innovation) -> impl IntoView {
    view! {
        <section id=Section::Innovation.id() class="section dark">
            <div class="grid two">
                <div class="order-last">
                    <div class="eyebrow">"The Discovery"</div>
                    <h2>{content.heading}</h2>
                    <p class="lead">{content.first}</p>
                    <p>{content.second}</p>
                </div>
                <ProcessFlowDiagram />
            </div>
        </section>
    }
}

#[component]
pub(super) fn ResultsSection(results: Results) -> impl IntoView {
    let heading = results.heading.clone();
    let description = results.description.clone();
    view! {
        <section id=Section::Results.id() class="section light">
            <div class="centered">
                <div class="eyebrow">"Results"</div>
                <h2>{heading}</h2>
                <p class="lead">{description}</p>
            </div>
            <ResultsChartDiagram results=results />
        </section>
    }
}

#[component]
pub(super) fn ImpactSection(impact: Impact) -> impl IntoView {
    view! {
        <section id=Section::Impact.id() class="section tinted">
            <div class="grid two">
                <Backdrop caption=impact.scene_caption />
                <div>
                    <div class="eyebrow">"Impact"</div>
                    <h2>{impact.heading}</h2>
                    <p class="lead">{impact.first}</p>
                    <p>{impact.second}</p>
                    <blockquote class="quote">
                        <p>"\u{201C}"{impact.quote}"\u{201D}"</p>
                        <span>"- "{impact.quote_attribution}</span>
                    </blockquote>
                </div>
            </div>
        </section>
    }
}

#[component]
pub(super) fn AuthorsSection(authors: Vec<Author>, team: Team) -> impl IntoView {
    let cards = authors
        .into_iter()
        .map(|a| {
            view! {
                <div class="author card" style=fade_in_style(a.delay_ms)>
                    <h3>{a.name}</h3>
                    <div class="rule small"></div>
                    <p class="role">{a.role}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Authors.id() class="section light">
            <div class="centered">
                <div class="eyebrow">"Research Team"</div>
                <h2>"Key Contributors"</h2>
                <p class="lead">{team.institution}</p>
                <p class="muted">{team.program}</p>
            </div>
            <div class="authors">{cards}</div>
        </section>
    }
}

#[component]
pub(super) fn Footer(meta: Meta, note: String) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-inner">
                <div>
                    <div class="footer-title">{meta.title}</div>
                    <p>{meta.subtitle}</p>
                </div>
                <a class="btn" href=meta.paper_url target="_blank" rel="noopener noreferrer">
                    "Download Paper (PDF)"
                </a>
            </div>
            <div class="footer-note">{note}</div>
        </footer>
    }
}
