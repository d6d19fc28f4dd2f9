use std::rc::Rc;

use yew::prelude::*;

use crate::components::{
    education::Education, experience::Experience, footer::Footer, hero::Hero, nav::Nav,
    projects::Projects, skills::Skills,
};
use crate::config;
use crate::content::Content;
use crate::hooks::use_loaded;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub content: Rc<Content>,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let content = &props.content;
    let loaded = use_loaded(config::LOAD_DELAY_MS);

    html! {
        <>
            <style>{PAGE_CSS}</style>
            <div class="portfolio-page">
                <Nav
                    name={content.profile.short_name.clone()}
                    mailto={content.profile.mailto()}
                    {loaded}
                />
                <Hero
                    profile={content.profile.clone()}
                    links={content.social_links.clone()}
                    {loaded}
                />
                <Education entries={content.education.clone()} />
                <Projects projects={content.projects.clone()} />
                <Experience entries={content.experience.clone()} />
                <Skills groups={content.skills.clone()} />
                <Footer profile={content.profile.clone()} />
            </div>
        </>
    }
}

/// Shown when the embedded content document cannot be loaded.
#[function_component(ContentUnavailable)]
pub fn content_unavailable() -> Html {
    html! {
        <div class="portfolio-page content-unavailable">
            <style>{PAGE_CSS}</style>
            <p class="mono-label accent">{"This page could not be loaded."}</p>
        </div>
    }
}

const PAGE_CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Playfair+Display:ital,wght@0,400;0,700;1,400&family=Lora:ital@0;1&family=DM+Mono:wght@300;400&display=swap');
*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
html { -webkit-text-size-adjust: 100%; text-size-adjust: 100%; }
body { background-color: #0d0c0b; color: #f0ede6; -webkit-font-smoothing: antialiased; overflow-x: hidden; }
::selection { background: rgba(200,185,138,0.25); }
::-webkit-scrollbar { width: 4px; }
::-webkit-scrollbar-track { background: #0d0c0b; }
::-webkit-scrollbar-thumb { background: rgba(200,185,138,0.3); border-radius: 2px; }
a:hover { opacity: 0.8; }

.portfolio-page {
    min-height: 100vh;
    background-color: #0d0c0b;
}
.content-unavailable {
    display: flex;
    align-items: center;
    justify-content: center;
}
.italic { font-style: italic; font-weight: 400; }
.accent { color: #c8b98a; }

.mono-label {
    font-family: 'DM Mono', monospace;
    font-size: clamp(0.72rem, 1.4vw, 0.8rem);
    letter-spacing: 0.12em;
    text-transform: uppercase;
    margin-bottom: 0.9rem;
}
.mono-meta {
    font-family: 'DM Mono', monospace;
    font-size: clamp(0.72rem, 1.3vw, 0.78rem);
    color: rgba(240,237,230,0.35);
    letter-spacing: 0.06em;
}
.mono-caption {
    font-family: 'DM Mono', monospace;
    font-size: 0.72rem;
    letter-spacing: 0.14em;
    text-transform: uppercase;
    color: rgba(240,237,230,0.28);
    margin-bottom: 0.7rem;
}

.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    padding: 1.4rem 2rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
    backdrop-filter: blur(12px);
    border-bottom: 1px solid rgba(255,255,255,0.06);
    background-color: rgba(13,12,11,0.85);
    transition: opacity 0.6s ease;
}
.nav-name {
    font-family: 'DM Mono', monospace;
    font-size: 0.78rem;
    letter-spacing: 0.15em;
    text-transform: uppercase;
    color: rgba(240,237,230,0.5);
}
.nav-contact {
    font-family: 'DM Mono', monospace;
    font-size: 0.78rem;
    letter-spacing: 0.12em;
    text-transform: uppercase;
    color: #c8b98a;
    text-decoration: none;
}

.hero {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    text-align: center;
    padding: clamp(6rem, 12vw, 9rem) clamp(1.5rem, 6vw, 6rem);
    position: relative;
    overflow: hidden;
}
.hero-grid {
    position: absolute;
    inset: 0;
    background-image: linear-gradient(rgba(200,185,138,0.09) 1px, transparent 1px), linear-gradient(90deg, rgba(200,185,138,0.09) 1px, transparent 1px);
    background-size: 64px 64px;
    pointer-events: none;
    mask-image: radial-gradient(ellipse 80% 80% at 50% 50%, black 40%, transparent 100%);
    -webkit-mask-image: radial-gradient(ellipse 80% 80% at 50% 50%, black 40%, transparent 100%);
}
.hero-rule {
    position: absolute;
    left: 50%;
    transform: translateX(-50%);
    width: 1px;
    background-color: #c8b98a;
    transition: height 1s cubic-bezier(0.16, 1, 0.3, 1) 0.3s;
}
.hero-rule-top { top: 0; }
.hero-rule-bottom { bottom: 0; }
.hero-content {
    position: relative;
    display: flex;
    flex-direction: column;
    align-items: center;
}
.hero-tagline {
    font-family: 'DM Mono', monospace;
    font-size: clamp(0.72rem, 1.8vw, 0.85rem);
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: #c8b98a;
    margin-bottom: 1.75rem;
}
.hero-name {
    font-family: 'Playfair Display', serif;
    font-size: clamp(3.2rem, 9vw, 7.5rem);
    font-weight: 700;
    line-height: 0.95;
    letter-spacing: -0.03em;
    color: #f0ede6;
    margin-bottom: 2.5rem;
}
.hero-summary {
    font-family: 'Lora', serif;
    font-size: clamp(1rem, 1.8vw, 1.15rem);
    line-height: 1.8;
    color: rgba(240,237,230,0.55);
    max-width: 480px;
    margin-bottom: 3rem;
}
.social-links {
    display: flex;
    gap: 0.75rem;
    flex-wrap: wrap;
    justify-content: center;
}
.social-link {
    font-family: 'DM Mono', monospace;
    font-size: clamp(0.72rem, 1.4vw, 0.82rem);
    letter-spacing: 0.15em;
    text-transform: uppercase;
    text-decoration: none;
    padding: 0.6rem 1.4rem;
    transition: background-color 0.2s ease, color 0.2s ease;
}

.page-section {
    padding: clamp(4rem, 8vw, 7rem) clamp(1.5rem, 6vw, 6rem);
    border-top: 1px solid rgba(255,255,255,0.08);
}
.section-heading {
    margin-bottom: 3.5rem;
    display: flex;
    align-items: center;
    gap: 1.5rem;
}
.section-heading h2 {
    font-family: 'Playfair Display', serif;
    font-size: clamp(2.2rem, 5vw, 3.2rem);
    font-weight: 700;
    letter-spacing: -0.025em;
    color: #f0ede6;
}
.section-rule {
    flex: 1;
    height: 1px;
    background-color: rgba(255,255,255,0.1);
    max-width: 300px;
}
.row-rule { border-top: 1px solid rgba(255,255,255,0.08); }

.exp-row {
    display: grid;
    grid-template-columns: 220px 1fr;
    gap: 2.5rem;
    border-top: 1px solid rgba(255,255,255,0.08);
    padding: 2.5rem 0;
}
.edu-school, .edu-details { padding-top: 0.15rem; }
.edu-school-name {
    font-family: 'Playfair Display', serif;
    font-size: clamp(1.6rem, 3.2vw, 2.2rem);
    font-weight: 700;
    color: #f0ede6;
    line-height: 1.15;
    letter-spacing: -0.02em;
    margin-bottom: 0.4rem;
}
.edu-degree {
    font-family: 'Playfair Display', serif;
    font-size: clamp(1.05rem, 2vw, 1.2rem);
    font-weight: 700;
    color: #f0ede6;
    margin-bottom: 0.6rem;
    line-height: 1.3;
}
.edu-gpa {
    display: flex;
    align-items: baseline;
    gap: 0.75rem;
    margin-bottom: 2rem;
}
.edu-gpa .mono-label { color: rgba(240,237,230,0.4); margin-bottom: 0; }
.edu-gpa-value {
    font-family: 'Playfair Display', serif;
    font-size: clamp(1.6rem, 3vw, 2.2rem);
    font-weight: 700;
    color: #c8b98a;
    letter-spacing: -0.02em;
    line-height: 1;
}

.chip-list {
    display: flex;
    flex-wrap: wrap;
    gap: 0.55rem;
    margin-bottom: 2rem;
}
.chip {
    font-family: 'DM Mono', monospace;
    font-size: 0.75rem;
    letter-spacing: 0.08em;
    color: rgba(240,237,230,0.5);
    border: 1px solid rgba(240,237,230,0.12);
    padding: 0.25rem 0.65rem;
    border-radius: 2px;
}
.chip-upper {
    font-size: 0.78rem;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    padding: 0.3rem 0.75rem;
}
.chip-accent {
    color: #c8b98a;
    border-color: rgba(200,185,138,0.35);
}

.dash-list, .bullet-list {
    display: flex;
    flex-direction: column;
    gap: 0.6rem;
}
.bullet-list { gap: 0.85rem; margin-bottom: 1.75rem; }
.dash-item {
    display: flex;
    align-items: flex-start;
    gap: 0.85rem;
    font-family: 'Lora', serif;
    font-size: clamp(0.95rem, 1.8vw, 1.05rem);
    color: rgba(240,237,230,0.6);
    line-height: 1.5;
}
.dash {
    color: #c8b98a;
    font-family: 'DM Mono', monospace;
    font-size: 0.75rem;
    padding-top: 0.38rem;
    flex-shrink: 0;
}
.bullet {
    font-size: clamp(1rem, 1.8vw, 1.08rem);
    line-height: 1.82;
    color: rgba(240,237,230,0.65);
}

.card-column { display: flex; flex-direction: column; }
.card {
    border-top: 1px solid rgba(255,255,255,0.12);
    padding: 2.5rem 0;
    cursor: default;
}
.card-header {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    flex-wrap: wrap;
    gap: 0.75rem;
    margin-bottom: 1.25rem;
}
.card-title-group {
    display: flex;
    align-items: baseline;
    gap: 1.25rem;
    flex-wrap: wrap;
}
.card-title {
    font-family: 'Playfair Display', serif;
    font-size: clamp(2rem, 5vw, 2.8rem);
    font-weight: 700;
    text-decoration: none;
    letter-spacing: -0.02em;
    line-height: 1.05;
    transition: color 0.25s ease;
}
.card-tag {
    font-family: 'DM Mono', monospace;
    font-size: 0.8rem;
    color: #c8b98a;
    letter-spacing: 0.12em;
    text-transform: uppercase;
    padding-top: 0.1rem;
}
.card-meta {
    font-family: 'DM Mono', monospace;
    font-size: 0.8rem;
    color: rgba(240,237,230,0.35);
    letter-spacing: 0.08em;
}
.card-period { padding-top: 0.55rem; }
.card-description {
    font-family: 'Lora', serif;
    font-size: clamp(1.05rem, 2.2vw, 1.15rem);
    line-height: 1.8;
    color: rgba(240,237,230,0.7);
    margin-bottom: 1.4rem;
}
.card-links {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 1.5rem;
}
.arrow-link {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}
.card-link {
    font-family: 'DM Mono', monospace;
    font-size: 0.78rem;
    letter-spacing: 0.12em;
    text-transform: uppercase;
    color: #c8b98a;
    text-decoration: none;
    border-bottom: 1px solid rgba(200,185,138,0.4);
    padding-bottom: 1px;
}
.card-link-alt {
    color: #8ab4c8;
    border-bottom-color: rgba(138,180,200,0.4);
}
.arrow { color: rgba(200,185,138,0.5); font-size: 0.8rem; }

.skills-section {
    padding: clamp(3.5rem, 7vw, 6rem) clamp(1.5rem, 6vw, 6rem);
    background-color: rgba(200,185,138,0.025);
    text-align: center;
}
.skills-grid {
    display: flex;
    gap: 4rem;
    flex-wrap: wrap;
    justify-content: center;
    align-items: flex-start;
}
.skill-group { min-width: 120px; }
.skill-items {
    display: flex;
    flex-direction: column;
    gap: 0.6rem;
    align-items: center;
    font-family: 'Lora', serif;
    font-size: clamp(1rem, 2vw, 1.1rem);
    color: rgba(240,237,230,0.6);
}

.page-footer {
    padding: clamp(5rem, 10vw, 8rem) clamp(1.5rem, 6vw, 6rem);
    border-top: 1px solid rgba(255,255,255,0.08);
}
.footer-heading {
    font-family: 'Playfair Display', serif;
    font-size: clamp(2.5rem, 7vw, 5.5rem);
    font-weight: 700;
    letter-spacing: -0.03em;
    line-height: 1;
    color: #f0ede6;
    margin-bottom: 2.5rem;
}
.footer-email {
    font-family: 'DM Mono', monospace;
    font-size: clamp(0.78rem, 1.6vw, 0.88rem);
    letter-spacing: 0.12em;
    text-transform: uppercase;
    color: #f0ede6;
    border: 1px solid rgba(240,237,230,0.25);
    padding: 0.9rem 2rem;
    display: inline-block;
    user-select: all;
    cursor: text;
}
.footer-bottom {
    margin-top: 5rem;
    padding-top: 2rem;
    border-top: 1px solid rgba(255,255,255,0.08);
    display: flex;
    justify-content: space-between;
    align-items: center;
    flex-wrap: wrap;
    gap: 1rem;
}
.footer-copyright {
    font-family: 'DM Mono', monospace;
    font-size: 0.72rem;
    letter-spacing: 0.1em;
    color: rgba(240,237,230,0.25);
}
.footer-links { display: flex; gap: 1.5rem; }
.footer-links a {
    font-family: 'DM Mono', monospace;
    font-size: 0.72rem;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    color: rgba(240,237,230,0.3);
    text-decoration: none;
}

@media (max-width: 640px) {
    .exp-row { grid-template-columns: 1fr; gap: 1rem; }
    .skills-grid { gap: 2.5rem; }
}
"#;
