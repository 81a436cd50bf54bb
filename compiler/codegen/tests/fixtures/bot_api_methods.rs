impl Bot {
    /// Use this method to close the bot instance before moving it from one local server to another.
    pub async fn close(&self) -> Outcome<bool> {
        let request_params = Params::new();
        let response = match self.dispatch("close", request_params, None).await {
            Ok(response) => response,
            Err(err) => return Outcome::failure(false, err),
        };
        match codec::decode::<bool>(&response) {
            Ok(value) => Outcome::success(value),
            Err(err) => Outcome::failure(false, err),
        }
    }
}

/// Optional parameters of `getUpdates`.
#[derive(Debug, Clone, Default)]
pub struct GetUpdatesOpts {
    /// Identifier of the first update to be returned.
    pub offset: i64,
    /// A list of the update types you want your bot to receive.
    pub allowed_updates: Vec<String>,
}

impl Bot {
    /// Use this method to receive incoming updates using long polling.
    pub async fn get_updates(&self, opts: GetUpdatesOpts) -> Outcome<Vec<Update>> {
        let mut request_params = Params::new();
        request_params.add("offset", opts.offset.to_string());
        if !opts.allowed_updates.is_empty() {
            match codec::encode_param("allowed_updates", &opts.allowed_updates) {
                Ok(encoded) => request_params.add("allowed_updates", encoded),
                Err(err) => return Outcome::failure(Vec::new(), err),
            }
        }
        let response = match self.dispatch("getUpdates", request_params, None).await {
            Ok(response) => response,
            Err(err) => return Outcome::failure(Vec::new(), err),
        };
        match codec::decode::<Vec<Update>>(&response) {
            Ok(value) => Outcome::success(value),
            Err(err) => Outcome::failure(Vec::new(), err),
        }
    }
}

/// Optional parameters of `sendMessage`.
#[derive(Debug, Clone, Default)]
pub struct SendMessageOpts {
    /// A list of special entities that appear in message text.
    pub entities: Vec<MessageEntity>,
    /// If the message is a reply, ID of the original message.
    pub reply_to_message_id: i64,
}

impl Bot {
    /// Use this method to send text messages.
    /// On success, the sent Message is returned.
    pub async fn send_message(&self, chat_id: i64, text: String, opts: SendMessageOpts) -> Outcome<Option<Box<Message>>> {
        let mut request_params = Params::new();
        request_params.add("chat_id", chat_id.to_string());
        request_params.add("text", text.to_string());
        if !opts.entities.is_empty() {
            match codec::encode_param("entities", &opts.entities) {
                Ok(encoded) => request_params.add("entities", encoded),
                Err(err) => return Outcome::failure(None, err),
            }
        }
        request_params.add("reply_to_message_id", opts.reply_to_message_id.to_string());
        let response = match self.dispatch("sendMessage", request_params, None).await {
            Ok(response) => response,
            Err(err) => return Outcome::failure(None, err),
        };
        match codec::decode::<Message>(&response) {
            Ok(value) => Outcome::success(Some(Box::new(value))),
            Err(err) => Outcome::failure(None, err),
        }
    }
}

impl Bot {
    /// Use this method to set a new profile photo for the chat.
    pub async fn set_chat_photo(&self, chat_id: i64, photo: InputFile) -> Outcome<bool> {
        let mut request_params = Params::new();
        request_params.add("chat_id", chat_id.to_string());
        let _ = photo;
        let response = match self.dispatch("setChatPhoto", request_params, None).await {
            Ok(response) => response,
            Err(err) => return Outcome::failure(false, err),
        };
        match codec::decode::<bool>(&response) {
            Ok(value) => Outcome::success(value),
            Err(err) => Outcome::failure(false, err),
        }
    }
}

