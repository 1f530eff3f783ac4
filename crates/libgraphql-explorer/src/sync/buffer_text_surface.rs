use crate::selection::ListenerId;
use crate::selection::ListenerIdGenerator;
use crate::sync::TextSurface;
use parking_lot::Mutex;
use std::sync::Arc;

pub type TextListener = Arc<dyn Fn(&str) + Send + Sync>;

/// In-memory [`TextSurface`]. Listeners observe [`TextSurface::set_text`]
/// only; silent updates are not reported.
#[derive(Default)]
pub struct BufferTextSurface {
    listener_ids: ListenerIdGenerator,
    listeners: Mutex<Vec<(ListenerId, TextListener)>>,
    text: Mutex<String>,
}
impl BufferTextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(text.into()),
            ..Self::default()
        }
    }

    pub fn add_listener(
        &self,
        listener: impl Fn(&str) + Send + Sync + 'static,
    ) -> ListenerId {
        let id = self.listener_ids.next();
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock();
        let len_before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != len_before
    }
}
impl TextSurface for BufferTextSurface {
    fn set_text(&self, text: String) {
        *self.text.lock() = text.clone();
        let listeners: Vec<TextListener> =
            self.listeners.lock()
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect();
        for listener in listeners {
            listener(&text);
        }
    }

    fn set_text_silently(&self, text: String) {
        *self.text.lock() = text;
    }

    fn text(&self) -> String {
        self.text.lock().clone()
    }
}
impl std::fmt::Debug for BufferTextSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferTextSurface")
            .field("text", &*self.text.lock())
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}
