use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/projects")]
    Projects,

    #[at("/ongoing")]
    OngoingProjects,

    #[at("/reviews")]
    Reviews,

    #[at("/admin/login")]
    AdminLogin,

    #[at("/admin")]
    AdminDashboard,

    #[at("/admin/projects")]
    AdminProjects,

    #[at("/admin/ongoing")]
    AdminOngoingProjects,

    #[at("/admin/reviews")]
    AdminReviews,

    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// True for routes rendered inside the admin shell (no public chrome).
    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Route::AdminLogin
                | Route::AdminDashboard
                | Route::AdminProjects
                | Route::AdminOngoingProjects
                | Route::AdminReviews
        )
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Projects => html! { <pages::projects::ProjectsPage /> },
        Route::OngoingProjects => html! { <pages::ongoing_projects::OngoingProjectsPage /> },
        Route::Reviews => html! { <pages::reviews::ReviewsPage /> },
        Route::AdminLogin => html! { <pages::admin_login::AdminLoginPage /> },
        Route::AdminDashboard => html! { <pages::admin_dashboard::AdminDashboardPage /> },
        Route::AdminProjects => html! { <pages::admin_projects::AdminProjectsPage /> },
        Route::AdminOngoingProjects => {
            html! { <pages::admin_ongoing_projects::AdminOngoingProjectsPage /> }
        },
        Route::AdminReviews => html! { <pages::admin_reviews::AdminReviewsPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                <Header />
                <div class="flex-1 pt-[var(--space-sm)]">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
