mod http;

pub use self::http::{send, ApiRequest, Exchange, HttpMethod, RequestError, MAX_REQUEST_BODY_SIZE};

// We use Crux's built-in Render capability directly because it provides
// all necessary functionality for triggering view updates.
pub use crux_core::render::Render;
pub use crux_http::Http;

use crate::event::Event;

// The derive names effect variants after the capability type, so the fields
// spell out `Http<Event>` rather than the aliases.
#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub http: Http<Event>,
    pub render: Render<Event>,
}
