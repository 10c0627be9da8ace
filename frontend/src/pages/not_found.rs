use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page p-8 text-center">
            <h1 class="text-2xl font-bold text-gray-900">{"404 - Page Not Found"}</h1>
            <p class="mt-2 text-gray-600">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::AdminGames} classes="mt-4 inline-block text-blue-600 hover:text-blue-800">
                {"Back to games"}
            </Link<Route>>
        </div>
    }
}
