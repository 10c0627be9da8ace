use chrono::Local;
use log::{debug, error};
use shared::{GameSummary, GamesApi, LoadOutcome, PageListController, PageRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::games::HttpGamesApi;
use crate::components::game_create_modal::GameCreateModal;
use crate::components::status_badge::{StatusBadge, TimeDot};
use crate::config::Config;
use crate::Route;

#[function_component(AdminGames)]
pub fn admin_games() -> Html {
    let navigator = use_navigator();

    // Never borrowed across an await; results are applied by ticket.
    let controller = use_mut_ref(|| PageListController::new(Config::games_page_size()));
    let redraw = use_force_update();
    let error = use_state(|| None::<String>);
    let create_opened = use_state(|| false);

    let dispatch = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        let error = error.clone();

        Callback::from(move |request: PageRequest| {
            redraw.force_update();

            let controller = controller.clone();
            let redraw = redraw.clone();
            let error = error.clone();

            spawn_local(async move {
                let result = HttpGamesApi.fetch_games_page(request.count, request.skip).await;
                let outcome = controller.borrow_mut().finish_load(request.ticket, result);
                match outcome {
                    LoadOutcome::Applied => error.set(None),
                    LoadOutcome::Failed(e) => {
                        error!("Failed to load games page {}: {}", request.page, e);
                        error.set(Some(e.to_string()));
                    }
                    LoadOutcome::Superseded => debug!("Dropped result for page {}", request.page),
                }
                redraw.force_update();
            });
        })
    };

    // Load the first page on mount
    {
        let controller = controller.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            let request = controller.borrow_mut().begin_load(1);
            if let Ok(request) = request {
                dispatch.emit(request);
            }
            || ()
        });
    }

    let on_previous = {
        let controller = controller.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            let request = controller.borrow_mut().previous_page_request();
            if let Some(request) = request {
                dispatch.emit(request);
            }
        })
    };

    let on_next = {
        let controller = controller.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            let request = controller.borrow_mut().next_page_request();
            if let Some(request) = request {
                dispatch.emit(request);
            }
        })
    };

    let on_created = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        let error = error.clone();
        let create_opened = create_opened.clone();
        Callback::from(move |game: GameSummary| {
            let merged = controller.borrow_mut().add_local_item(game);
            if let Err(e) = merged {
                error!("Rejected created game: {}", e);
                error.set(Some(e.to_string()));
            }
            create_opened.set(false);
            redraw.force_update();
        })
    };

    let open_create = {
        let create_opened = create_opened.clone();
        Callback::from(move |_: MouseEvent| create_opened.set(true))
    };

    let close_create = {
        let create_opened = create_opened.clone();
        Callback::from(move |_: ()| create_opened.set(false))
    };

    let (games, page, loading, can_go_previous, can_go_next) = {
        let view = controller.borrow();
        (
            view.items().map(|items| items.to_vec()),
            view.current_page(),
            view.is_loading(),
            view.can_go_previous(),
            view.can_go_next(),
        )
    };

    let render_row = |game: &GameSummary| {
        let state = game.status();
        let (start_text, end_text) = game.time_range_display(&Local);
        let on_edit = {
            let navigator = navigator.clone();
            let id = game.id;
            Callback::from(move |_: MouseEvent| {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::AdminGameInfo { id });
                }
            })
        };

        html! {
            <tr key={game.id} class="hover:bg-gray-50">
                <td class="px-6 py-4">
                    <div class="flex items-center justify-between gap-4">
                        <div class="flex items-center gap-3">
                            if let Some(poster) = &game.poster {
                                <img src={poster.clone()} alt={game.title.clone()} class="h-10 w-10 object-cover" />
                            } else {
                                <div class="h-10 w-10 flex items-center justify-center bg-gray-200 text-gray-600 font-bold">
                                    {game.avatar_initial().map(String::from).unwrap_or_default()}
                                </div>
                            }
                            <span class="text-sm font-bold text-gray-900">{&game.title}</span>
                        </div>
                        <StatusBadge {state} />
                    </div>
                </td>
                <td class="px-6 py-4 whitespace-nowrap">
                    <div class="flex items-center gap-2">
                        <TimeDot {state} text={start_text} />
                        <span class="text-gray-400">{"»"}</span>
                        <TimeDot {state} text={end_text} />
                    </div>
                </td>
                <td class="px-6 py-4">
                    <p class="text-sm text-gray-500 truncate max-w-md">{&game.summary}</p>
                </td>
                <td class="px-6 py-4">
                    <button onclick={on_edit} class="text-blue-600 hover:text-blue-800 text-sm font-medium">
                        {"Edit"}
                    </button>
                </td>
            </tr>
        }
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between mb-6">
                    <button
                        onclick={open_create}
                        class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700"
                    >
                        {"+ New game"}
                    </button>
                    <div class="flex items-center gap-2">
                        <button
                            onclick={on_previous}
                            disabled={!can_go_previous}
                            class="px-3 py-2 bg-white border border-gray-300 rounded-md disabled:opacity-40"
                        >
                            {"◀"}
                        </button>
                        <span class="text-sm text-gray-600">{format!("Page {}", page)}</span>
                        <button
                            onclick={on_next}
                            disabled={!can_go_next}
                            class="px-3 py-2 bg-white border border-gray-300 rounded-md disabled:opacity-40"
                        >
                            {"▶"}
                        </button>
                    </div>
                </div>

                if let Some(message) = &*error {
                    <div class="mb-4 p-4 rounded-md bg-red-50 text-red-700 text-sm">{message}</div>
                }

                <div class="bg-white shadow rounded-lg">
                    if loading && games.is_none() {
                        <div class="p-8 text-center">
                            <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
                            <p class="mt-2 text-gray-600">{"Loading games..."}</p>
                        </div>
                    } else {
                        <div class="overflow-x-auto">
                            <table class="min-w-full divide-y divide-gray-200">
                                <thead class="bg-gray-50">
                                    <tr>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Game"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Schedule"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Summary"}</th>
                                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Actions"}</th>
                                    </tr>
                                </thead>
                                <tbody class="bg-white divide-y divide-gray-200">
                                    {for games.iter().flatten().map(render_row)}
                                </tbody>
                            </table>
                        </div>
                    }
                </div>
            </div>

            <GameCreateModal
                is_open={*create_opened}
                on_close={close_create}
                on_created={on_created}
            />
        </div>
    }
}
