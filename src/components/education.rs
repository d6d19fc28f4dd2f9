use yew::prelude::*;

use crate::components::heading::SectionHeading;
use crate::content::EducationEntry;

#[derive(Properties, PartialEq)]
pub struct EducationProps {
    pub entries: Vec<EducationEntry>,
}

#[function_component(Education)]
pub fn education(props: &EducationProps) -> Html {
    html! {
        <section class="page-section">
            <SectionHeading title="Education" />
            { for props.entries.iter().map(education_row) }
            <div class="row-rule"></div>
        </section>
    }
}

fn education_row(entry: &EducationEntry) -> Html {
    html! {
        <div class="exp-row" key={entry.school.clone()}>
            <div class="edu-school">
                <p class="mono-label accent">{&entry.period}</p>
                <p class="edu-school-name">
                    {&entry.school}<br />
                    <span class="italic accent">{&entry.school_emphasis}</span>
                </p>
                <p class="mono-meta">{&entry.location}</p>
            </div>
            <div class="edu-details">
                <p class="edu-degree">{&entry.degree}</p>
                {
                    if let Some(gpa) = &entry.gpa {
                        html! {
                            <div class="edu-gpa">
                                <span class="mono-label">{"GPA"}</span>
                                <span class="edu-gpa-value">{gpa}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if entry.coursework.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <>
                                <p class="mono-caption">{"Relevant Coursework"}</p>
                                <div class="chip-list">
                                    { for entry.coursework.iter().map(|course| html! {
                                        <span key={course.clone()} class="chip">{course}</span>
                                    }) }
                                </div>
                            </>
                        }
                    }
                }
                {
                    if entry.activities.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <>
                                <p class="mono-caption">{"Activities"}</p>
                                <div class="dash-list">
                                    { for entry.activities.iter().map(|activity| html! {
                                        <div key={activity.clone()} class="dash-item">
                                            <span class="dash">{"\u{2014}"}</span>
                                            <span>{activity}</span>
                                        </div>
                                    }) }
                                </div>
                            </>
                        }
                    }
                }
            </div>
        </div>
    }
}
