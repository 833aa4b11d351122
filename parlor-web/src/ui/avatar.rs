use parlor_client::api::Author;
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct AvatarProps {
    pub author: Author,
}

#[function_component(Avatar)]
pub fn avatar(p: &AvatarProps) -> Html {
    let name = p.author.display_name();
    match &p.author.photo {
        Some(url) => html! {
            <img class="avatar rounded-circle" src={url.clone()} alt={name} />
        },
        None => html! {
            <span class="avatar avatar-initials rounded-circle" aria-label={name.clone()}>
                { util::initials(&name) }
            </span>
        },
    }
}
