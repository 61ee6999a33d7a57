pub struct AdminLogin<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone)]
pub struct LoginAttempt {
    pub username: String,
    pub password: String,
}

impl<'a> AdminLogin<'a> {
    // Plain equality against the configured pair
    pub fn execute(&self, attempt: &LoginAttempt) -> bool {
        attempt.username == self.username && attempt.password == self.password
    }
}
