use yew::prelude::*;

use crate::components::heading::SectionHeading;
use crate::content::{Link, Project};
use crate::hooks::{hover_callbacks, use_hover, use_reveal};
use crate::reveal::Threshold;
use crate::style::PROJECT_CARD;

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub projects: Vec<Project>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    html! {
        <section class="page-section">
            <SectionHeading title="Projects" />
            <div>
                { for props.projects.iter().enumerate().map(|(index, project)| html! {
                    <ProjectCard key={project.slug.clone()} project={project.clone()} {index} />
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    pub index: usize,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let ProjectCardProps { project, index } = props;
    let reveal = use_reveal(Threshold::default());
    let hover = use_hover();
    let (onmouseenter, onmouseleave) = hover_callbacks(&hover, &project.slug);

    let title_color = if hover.is_hovered(&project.slug) { "#c8b98a" } else { "#f0ede6" };

    html! {
        <div
            ref={reveal.node.clone()}
            class="card"
            style={PROJECT_CARD.css(reveal.phase(), *index)}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="card-header">
                <div class="card-title-group">
                    <a
                        href={project.url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="card-title"
                        style={format!("color: {};", title_color)}
                    >
                        {&project.title}
                    </a>
                    <span class="card-tag">{&project.tag}</span>
                </div>
                <span class="card-meta">{&project.year}</span>
            </div>

            <p class="card-description">{&project.description}</p>

            <div class="chip-list">
                { for project.tech.iter().map(|tech| html! {
                    <span key={tech.clone()} class="chip chip-upper">{tech}</span>
                }) }
            </div>

            <div class="card-links">
                { arrow_link("View on GitHub", &project.url, "card-link") }
                { for project.extra_links.iter().map(|link: &Link| arrow_link(&link.label, &link.href, "card-link card-link-alt")) }
            </div>
        </div>
    }
}

fn arrow_link(label: &str, href: &str, class: &'static str) -> Html {
    html! {
        <div class="arrow-link">
            <a href={href.to_string()} target="_blank" rel="noopener noreferrer" class={class}>
                {label}
            </a>
            <span class="arrow">{"\u{2192}"}</span>
        </div>
    }
}
