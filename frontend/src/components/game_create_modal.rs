use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use log::{debug, error};
use shared::{GameCreateRequest, GameSummary, GamesApi, SharedError};
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::games::HttpGamesApi;
use crate::components::common_modal::Modal;

const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parses a `datetime-local` input value interpreted in `tz`
pub fn parse_datetime_input<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(value.trim(), INPUT_FORMAT).ok()?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Builds and validates a create request from the raw form fields
pub fn build_create_request<Tz: TimeZone>(
    title: &str,
    start: &str,
    end: &str,
    tz: &Tz,
) -> Result<GameCreateRequest, SharedError> {
    let start = parse_datetime_input(start, tz)
        .ok_or_else(|| SharedError::Validation("Start time is required".to_string()))?;
    let end = parse_datetime_input(end, tz)
        .ok_or_else(|| SharedError::Validation("End time is required".to_string()))?;

    let request = GameCreateRequest {
        title: title.trim().to_string(),
        start,
        end,
    };
    request.validate()?;
    Ok(request)
}

#[derive(Properties, PartialEq)]
pub struct GameCreateModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    /// Receives the record returned by the server
    pub on_created: Callback<GameSummary>,
}

#[function_component(GameCreateModal)]
pub fn game_create_modal(props: &GameCreateModalProps) -> Html {
    let title = use_state(String::new);
    let start = use_state(String::new);
    let end = use_state(String::new);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    let bind = |field: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };
    let on_title = bind(title.clone());
    let on_start = bind(start.clone());
    let on_end = bind(end.clone());

    let on_submit = {
        let title = title.clone();
        let start = start.clone();
        let end = end.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = match build_create_request(&title, &start, &end, &Local) {
                Ok(request) => request,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };

            submitting.set(true);
            error.set(None);

            let title = title.clone();
            let start = start.clone();
            let end = end.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            let on_created = on_created.clone();

            spawn_local(async move {
                match HttpGamesApi.create_game(&request).await {
                    Ok(game) => {
                        debug!("Game {} created", game.id);
                        title.set(String::new());
                        start.set(String::new());
                        end.set(String::new());
                        on_created.emit(game);
                    }
                    Err(err) => {
                        error!("Failed to create game: {}", err);
                        error.set(Some(err.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Modal is_open={props.is_open} title={"New game".to_string()} on_close={props.on_close.clone()}>
            <form onsubmit={on_submit} class="space-y-4">
                <div>
                    <label for="game-title" class="block text-sm font-medium text-gray-700 mb-1">{"Title"}</label>
                    <input
                        id="game-title"
                        type="text"
                        value={(*title).clone()}
                        oninput={on_title}
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                    />
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label for="game-start" class="block text-sm font-medium text-gray-700 mb-1">{"Start"}</label>
                        <input
                            id="game-start"
                            type="datetime-local"
                            value={(*start).clone()}
                            oninput={on_start}
                            class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        />
                    </div>
                    <div>
                        <label for="game-end" class="block text-sm font-medium text-gray-700 mb-1">{"End"}</label>
                        <input
                            id="game-end"
                            type="datetime-local"
                            value={(*end).clone()}
                            oninput={on_end}
                            class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        />
                    </div>
                </div>
                if let Some(message) = &*error {
                    <p class="text-sm text-red-600">{message}</p>
                }
                <div class="flex justify-end gap-2">
                    <button
                        type="button"
                        onclick={on_cancel}
                        class="px-4 py-2 bg-gray-300 text-gray-700 rounded-md hover:bg-gray-400"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
                        disabled={*submitting}
                        class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50"
                    >
                        {if *submitting { "Creating..." } else { "Create" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
