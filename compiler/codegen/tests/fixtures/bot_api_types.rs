/// This object represents a message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    /// Unique message identifier inside this chat.
    #[serde(rename = "message_id")]
    pub message_id: i64,
    /// Optional. For text messages, the actual UTF-8 text of the message.
    #[serde(rename = "text")]
    pub text: String,
    /// Optional. Special entities that appear in the text.
    #[serde(rename = "entities")]
    pub entities: Vec<MessageEntity>,
    /// Optional. For replies, the original message.
    #[serde(rename = "reply_to_message")]
    pub reply_to_message: Option<Box<Message>>,
}

/// This object represents one special entity in a text message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageEntity {
    /// Type of the entity.
    #[serde(rename = "type")]
    pub r#type: String,
    /// Offset in UTF-16 code units to the start of the entity.
    #[serde(rename = "offset")]
    pub offset: i64,
    ///
    #[serde(rename = "length")]
    pub length: i64,
}

/// This object represents an incoming update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Update {
    /// The update's unique identifier.
    #[serde(rename = "update_id")]
    pub update_id: i64,
    /// Optional. New incoming message of any kind.
    #[serde(rename = "message")]
    pub message: Option<Box<Message>>,
}

