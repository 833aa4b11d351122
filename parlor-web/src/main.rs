use lazy_static::lazy_static;
use parlor_client::api::{Author, AuthToken};

mod api;
mod ui;
mod util;

lazy_static! {
    static ref CLIENT: reqwest_middleware::ClientWithMiddleware = {
        let retry_policy =
            reqwest_retry::policies::ExponentialBackoff::builder().build_with_max_retries(3);
        reqwest_middleware::ClientBuilder::new(reqwest::Client::new())
            .with(reqwest_retry::RetryTransientMiddleware::new_with_policy(
                retry_policy,
            ))
            .build()
    };
}

/// Session saved by the enclosing feed application. The thread view never
/// resolves the viewer from ambient state below this point: whoever needs
/// the identity gets it as props.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SessionInfo {
    pub host: String,
    pub token: AuthToken,
    pub viewer: Author,
}

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<ui::App>::new().render();
}
