use teloxide::types::{ChatId, Recipient};

/// Interpret a configured chat identifier.
///
/// Numeric identifiers (including negative group ids) address a chat by id;
/// anything else is taken as a public channel username such as `@channel`.
#[must_use]
pub fn parse_recipient(chat_id: &str) -> Recipient {
    let chat_id = chat_id.trim();
    chat_id.parse::<i64>().map_or_else(
        |_| Recipient::ChannelUsername(chat_id.to_string()),
        |id| Recipient::Id(ChatId(id)),
    )
}
