// Pattern: Proxy - Access Control and Logging in Front of a Real Subject

use std::cell::RefCell;

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::error::Result;

pub trait Subject {
    fn request(&self) -> Vec<String>;
}

pub struct RealSubject;

impl Subject for RealSubject {
    fn request(&self) -> Vec<String> {
        vec!["RealSubject: Handling request.".to_string()]
    }
}

/// Same interface as the subject it wraps; checks access first and records
/// when each forwarded request happened.
pub struct Proxy<S: Subject> {
    real_subject: S,
    access_granted: bool,
    access_log: RefCell<Vec<DateTime<Local>>>,
}

impl<S: Subject> Proxy<S> {
    pub fn new(real_subject: S) -> Self {
        Self {
            real_subject,
            access_granted: true,
            access_log: RefCell::new(Vec::new()),
        }
    }

    pub fn deny_access(mut self) -> Self {
        self.access_granted = false;
        self
    }

    pub fn access_count(&self) -> usize {
        self.access_log.borrow().len()
    }

    fn check_access(&self) -> bool {
        if !self.access_granted {
            warn!("proxy refused a request");
        }
        self.access_granted
    }

    fn log_access(&self) -> DateTime<Local> {
        let now = Local::now();
        self.access_log.borrow_mut().push(now);
        info!(at = %now.format("%F %T"), "proxy forwarded a request");
        now
    }
}

impl<S: Subject> Subject for Proxy<S> {
    fn request(&self) -> Vec<String> {
        let mut lines = vec!["Proxy: Checking access prior to firing a real request.".to_string()];
        if !self.check_access() {
            lines.push("Proxy: Access denied.".to_string());
            return lines;
        }

        lines.extend(self.real_subject.request());
        let at = self.log_access();
        lines.push(format!("Proxy: Logging the time of request ({}).", at.format("%F %T")));
        lines
    }
}

fn client_code(subject: &dyn Subject) {
    for line in subject.request() {
        println!("{}", line);
    }
}

pub fn run() -> Result<()> {
    println!("Client: Executing the client code with a real subject:");
    client_code(&RealSubject);

    println!("\nClient: Executing the same client code with a proxy:");
    client_code(&Proxy::new(RealSubject));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_forwards_and_logs() {
        let proxy = Proxy::new(RealSubject);
        let lines = proxy.request();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "RealSubject: Handling request.");
        assert!(lines[2].starts_with("Proxy: Logging the time of request"));
        assert_eq!(proxy.access_count(), 1);
    }

    #[test]
    fn test_denied_proxy_never_reaches_subject() {
        let proxy = Proxy::new(RealSubject).deny_access();
        let lines = proxy.request();

        assert!(!lines.iter().any(|line| line.starts_with("RealSubject")));
        assert_eq!(proxy.access_count(), 0);
    }
}
