use dioxus_logger::tracing;

use crate::{model::action::TestMessageDto, server::model::action::TestMessage};

/// Log the message and echo it back.
pub fn echo_message(input: TestMessage) -> TestMessageDto {
    tracing::info!("Message: {}", input.message);

    TestMessageDto {
        server_response: format!("Server got: \"{}\"", input.message),
    }
}
