pub mod api;
pub mod browser;
pub mod builder;
pub mod constant;
pub mod fixtures;
pub mod setup;

pub use api::{ApiCall, MockAuthApi, MockResponse};
pub use browser::RecordingBrowser;
pub use builder::TestBuilder;
pub use fixtures::mockito::HttpTestSetup;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::*, ApiCall, HttpTestSetup, MockAuthApi, MockResponse, RecordingBrowser,
        TestBuilder, TestSetup,
    };
}
