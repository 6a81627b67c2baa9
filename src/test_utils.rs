use crate::http::{HTTPError, HTTPResult};
use crate::reddit::service::{PageRequest, Service};
use reqwest::StatusCode;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

/// Serves one test data file per requested page, in order, and records
/// the path of every request.
pub struct TestService {
    pages: RefCell<VecDeque<String>>,
    requests: RefCell<Vec<String>>,
}

impl TestService {
    pub fn new(files: &[&str]) -> Self {
        Self {
            pages: RefCell::new(files.iter().map(|file| load_data(file)).collect()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Service for TestService {
    async fn get_listing(&self, page: PageRequest<'_>) -> HTTPResult<String> {
        self.requests.borrow_mut().push(page.path());
        Ok(self
            .pages
            .borrow_mut()
            .pop_front()
            .expect("requested more pages than test data provides"))
    }
}

/// Fails every request as if Reddit were rate limiting us.
pub struct FailingService;

impl Service for FailingService {
    async fn get_listing(&self, _page: PageRequest<'_>) -> HTTPResult<String> {
        Err(HTTPError::Http(StatusCode::TOO_MANY_REQUESTS))
    }
}
