//! Leptos app: navigation, page sections and the four interactive diagrams.

use claimsite::content::PaperContent;
use leptos::prelude::*;

mod diagrams;
mod nav;
mod scheduler;
mod sections;

use nav::NavBar;
use sections::{
    AuthorsSection, Footer, HeroSection, ImpactSection, InnovationSection, IntroductionSection,
    LeaderboardSection, MethodologySection, ResultsSection, TrainingSection,
};

pub fn start() {
    web_sys::console::log_1(&"claimsite_web: mounting".into());
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let PaperContent {
        meta,
        hero,
        introduction,
        methodology,
        innovation,
        results,
        leaderboard,
        impact,
        team,
        authors,
        footer_note,
    } = PaperContent::default();

    view! {
        <div class="page">
            <NavBar meta=meta.clone() />
            <HeroSection meta=meta.clone() hero=hero />
            <main>
                <IntroductionSection content=introduction />
                <LeaderboardSection leaderboard=leaderboard />
                <MethodologySection content=methodology />
                <TrainingSection />
                <InnovationSection content=innovation />
                <ResultsSection results=results />
                <ImpactSection impact=impact />
                <AuthorsSection authors=authors team=team />
            </main>
            <Footer meta=meta note=footer_note />
        </div>
    }
}
