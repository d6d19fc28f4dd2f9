use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <h2>{props.title.clone()}</h2>
            <div class="section-rule"></div>
        </div>
    }
}
