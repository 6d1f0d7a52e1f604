use std::sync::Arc;

use crate::application::session::ChatClient;
use crate::infrastructure::model::ChatModel;

pub(crate) struct ServerState<P: ChatModel> {
    client: Arc<ChatClient<P>>,
}

impl<P: ChatModel> ServerState<P> {
    pub(crate) fn new(client: Arc<ChatClient<P>>) -> Self {
        Self { client }
    }

    pub(crate) fn client(&self) -> Arc<ChatClient<P>> {
        Arc::clone(&self.client)
    }
}
