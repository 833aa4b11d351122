use yew::prelude::*;

#[function_component(VerifiedBadge)]
pub fn verified_badge() -> Html {
    html! {
        <span
            class="verified-badge bi-patch-check-fill text-primary ms-1"
            title="Verified account"
            aria-label="Verified account"
        >
        </span>
    }
}
