//! Local stand-in for the GitHub raw content host and search API
//!
//! Serves canned bodies by exact request URL (path plus query) and answers
//! 404 for everything else.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;

use tiny_http::{Response, Server};

pub struct FakeGithub {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeGithub {
    /// Start serving `routes` (`"/owner/repo/branch/path"` -> body)
    pub fn start(routes: &[(&str, &str)]) -> Self {
        let server = Server::http("127.0.0.1:0").expect("failed to bind fake GitHub");
        let addr = server.server_addr().to_ip().expect("fake GitHub is not on TCP");
        let routes: HashMap<String, String> = routes
            .iter()
            .map(|(path, body)| ((*path).to_string(), (*body).to_string()))
            .collect();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        thread::spawn(move || {
            for request in server.incoming_requests() {
                let url = request.url().to_string();
                seen.lock().unwrap().push(url.clone());
                let response = match routes.get(&url) {
                    Some(body) => Response::from_string(body.clone()),
                    None => Response::from_string("404: Not Found").with_status_code(404),
                };
                let _ = request.respond(response);
            }
        });

        Self {
            url: format!("http://{addr}"),
            requests,
        }
    }

    /// Request URLs received so far
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}
