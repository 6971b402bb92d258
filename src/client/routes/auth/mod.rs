pub mod my_page;

pub use my_page::MyPage;
