mod home;
mod not_found;
pub(crate) mod paths;
mod section;

pub(crate) use home::HomePage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use section::SectionPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route
                path=path!("/register")
                view=|| view! { <SectionPage title="Register" icon="person_add" /> }
            />
            <Route
                path=path!("/signIn")
                view=|| view! { <SectionPage title="Login" icon="login" /> }
            />
            <Route
                path=path!("/myPostedJobs")
                view=|| view! { <SectionPage title="My Posted Jobs" icon="home" /> }
            />
            <Route
                path=path!("/addJob")
                view=|| view! { <SectionPage title="Add new job" icon="home" /> }
            />
            <Route
                path=path!("/jobApplication")
                view=|| view! { <SectionPage title="My Applications" icon="work" /> }
            />
        </Routes>
    }
}
