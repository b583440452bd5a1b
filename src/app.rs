//! Application shell: auth bootstrap, router table, navbar and footer.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::auth;
use crate::components::{Footer, Navbar, ProtectedRoute};
use crate::models::UserRole;
use crate::pages::{
    AdminPage, ApplicationDetailPage, ApplicationsPage, ChangePasswordPage, HomePage,
    InterviewsPage, JobOfferDetailPage, JobOffersPage, LoginPage, MyApplicationsPage,
    MyInterviewsPage, ProfilePage, UsersPage,
};

#[component]
pub fn App() -> impl IntoView {
    let store = auth::provide_auth();

    // Read the persisted session once, after the store is in context.
    Effect::new(move |_| {
        auth::init(store);
    });

    view! {
        <Router>
            <Navbar/>
            <main class="main-content">
                <Routes fallback=|| view! { <Redirect path="/home"/> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/home"/> }/>
                    <Route path=path!("/home") view=HomePage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/job-offers") view=JobOffersPage/>
                    <Route path=path!("/job-offers/:id") view=JobOfferDetailPage/>

                    <Route path=path!("/profile") view=|| view! {
                        <ProtectedRoute>
                            <ProfilePage/>
                        </ProtectedRoute>
                    }/>
                    <Route path=path!("/change-password") view=|| view! {
                        <ProtectedRoute>
                            <ChangePasswordPage/>
                        </ProtectedRoute>
                    }/>

                    <Route path=path!("/applications") view=|| view! {
                        <ProtectedRoute allowed_roles=vec![UserRole::Rh, UserRole::Admin]>
                            <ApplicationsPage/>
                        </ProtectedRoute>
                    }/>
                    <Route path=path!("/application/:id") view=|| view! {
                        <ProtectedRoute allowed_roles=vec![UserRole::Rh, UserRole::Admin]>
                            <ApplicationDetailPage/>
                        </ProtectedRoute>
                    }/>
                    <Route path=path!("/interviews") view=|| view! {
                        <ProtectedRoute allowed_roles=vec![UserRole::Rh, UserRole::Admin]>
                            <InterviewsPage/>
                        </ProtectedRoute>
                    }/>

                    <Route path=path!("/users") view=|| view! {
                        <ProtectedRoute allowed_roles=vec![UserRole::Admin]>
                            <UsersPage/>
                        </ProtectedRoute>
                    }/>
                    <Route path=path!("/admin") view=|| view! {
                        <ProtectedRoute allowed_roles=vec![UserRole::Admin]>
                            <AdminPage/>
                        </ProtectedRoute>
                    }/>

                    <Route path=path!("/my-applications") view=|| view! {
                        <ProtectedRoute allowed_roles=vec![UserRole::Candidat]>
                            <MyApplicationsPage/>
                        </ProtectedRoute>
                    }/>
                    <Route path=path!("/my-interviews") view=|| view! {
                        <ProtectedRoute allowed_roles=vec![UserRole::Candidat]>
                            <MyInterviewsPage/>
                        </ProtectedRoute>
                    }/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
