//! Client-side paths linked from the navigation bar.

pub const HOME: &str = "/";
pub const REGISTER: &str = "/register";
pub const SIGN_IN: &str = "/signIn";
pub const MY_POSTED_JOBS: &str = "/myPostedJobs";
pub const ADD_JOB: &str = "/addJob";
pub const JOB_APPLICATIONS: &str = "/jobApplication";
