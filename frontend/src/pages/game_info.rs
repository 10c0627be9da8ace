use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct GameInfoProps {
    pub id: i64,
}

/// Landing view of the edit route; the editor form mounts here
#[function_component(GameInfo)]
pub fn game_info(props: &GameInfoProps) -> Html {
    html! {
        <div class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
            <Link<Route> to={Route::AdminGames} classes="text-sm text-blue-600 hover:text-blue-800">
                {"← All games"}
            </Link<Route>>
            <h1 class="mt-4 text-3xl font-bold text-gray-900">{format!("Game #{}", props.id)}</h1>
            <p class="mt-2 text-gray-500">{shared::edit_route(props.id)}</p>
        </div>
    }
}
