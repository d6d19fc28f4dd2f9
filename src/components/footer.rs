use chrono::Datelike;
use yew::prelude::*;

use crate::content::Profile;
use crate::hooks::use_reveal;
use crate::reveal::Threshold;
use crate::style::FOOTER;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub profile: Profile,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let profile = &props.profile;
    let reveal = use_reveal(Threshold::default());
    let year = chrono::Local::now().year();

    html! {
        <footer ref={reveal.node.clone()} class="page-footer" style={FOOTER.css(reveal.phase(), 0)}>
            <p class="mono-label accent">{"Get in Touch"}</p>
            <h2 class="footer-heading">
                {"Let's work"}<br />
                <span class="italic">{"together."}</span>
            </h2>
            <span class="footer-email">{&profile.email}</span>
            <div class="footer-bottom">
                <span class="footer-copyright">{format!("{}, {}", profile.full_name(), year)}</span>
                <div class="footer-links">
                    { for profile.footer_links.iter().map(|link| html! {
                        <a
                            key={link.label.clone()}
                            href={link.href.clone()}
                            target={link.is_external().then_some("_blank")}
                            rel="noopener noreferrer"
                        >
                            {&link.label}
                        </a>
                    }) }
                </div>
            </div>
        </footer>
    }
}
