use crate::core::{
    errors::{Error, Result},
    traits::clipboard::Clipboard,
};

pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().map_err(unavailable)?;
        Ok(SystemClipboard { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: String) -> Result<()> {
        self.inner.set_text(text).map_err(unavailable)
    }
}

fn unavailable(e: arboard::Error) -> Error {
    Error::ClipboardUnavailable { msg: e.to_string() }
}
