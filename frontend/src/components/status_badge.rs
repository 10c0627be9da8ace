use shared::{ColorToken, LifecycleState};
use yew::prelude::*;

pub fn badge_classes(color: ColorToken) -> &'static str {
    match color {
        ColorToken::Yellow => "bg-yellow-100 text-yellow-800",
        ColorToken::Green => "bg-green-100 text-green-800",
        ColorToken::Red => "bg-red-100 text-red-800",
    }
}

pub fn dot_classes(color: ColorToken) -> &'static str {
    match color {
        ColorToken::Yellow => "bg-yellow-400",
        ColorToken::Green => "bg-green-400",
        ColorToken::Red => "bg-red-400",
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub state: LifecycleState,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let color = props.state.color();
    html! {
        <span
            class={classes!("inline-flex", "items-center", "px-2.5", "py-0.5", "rounded-full", "text-xs", "font-medium", badge_classes(color))}
            data-color={color.as_str()}
        >
            {props.state.label()}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimeDotProps {
    pub state: LifecycleState,
    pub text: String,
}

/// Small timestamp chip with a status-colored dot
#[function_component(TimeDot)]
pub fn time_dot(props: &TimeDotProps) -> Html {
    html! {
        <span class="inline-flex items-center gap-1 text-xs text-gray-700">
            <span class={classes!("h-2", "w-2", "rounded-full", dot_classes(props.state.color()))}></span>
            {&props.text}
        </span>
    }
}
