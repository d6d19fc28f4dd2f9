use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub name: String,
    pub mailto: String,
    pub loaded: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { name, mailto, loaded } = props;

    html! {
        <nav class="top-nav" style={format!("opacity: {};", if *loaded { "1" } else { "0" })}>
            <span class="nav-name">{name}</span>
            <a href={mailto.clone()} class="nav-contact">{"Contact"}</a>
        </nav>
    }
}
