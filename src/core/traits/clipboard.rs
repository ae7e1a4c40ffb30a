use crate::core::errors::Result;

#[mockall::automock]
pub trait Clipboard {
    fn write_text(&mut self, text: String) -> Result<()>;
}
