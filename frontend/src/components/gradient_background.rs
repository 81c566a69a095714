use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GradientBackgroundProps {
    #[prop_or_default]
    pub children: Html,
}

/// A reusable gradient background that provides the same visual base across
/// all pages of the application.
#[function_component(GradientBackground)]
pub fn gradient_background(props: &GradientBackgroundProps) -> Html {
    html! {
        <div class="relative min-h-screen overflow-hidden">
            <div class="fixed inset-0 bg-gradient-to-br from-indigo-100 via-purple-100 to-pink-100 -z-50"></div>

            // Blurred corner accents (bottom layer)
            <div class="fixed inset-0 overflow-hidden pointer-events-none" style="z-index: 0;">
                <div class="absolute top-1/4 -right-20 w-40 h-40 rounded-full bg-gradient-to-br from-pink-200 to-pink-300 opacity-50 blur-xl"></div>
                <div class="absolute bottom-1/4 -left-20 w-40 h-40 rounded-full bg-gradient-to-br from-indigo-200 to-purple-300 opacity-50 blur-xl"></div>
            </div>

            <div class="relative z-0">
                { props.children.clone() }
            </div>
        </div>
    }
}
