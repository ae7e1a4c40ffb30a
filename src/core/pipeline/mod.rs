pub mod copying;
pub mod loading;
pub mod materializing;
pub mod scraping;
pub mod testing;
