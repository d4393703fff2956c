use crate::components::ZoomableImage;
use leptos::*;
use leptos_meta::{provide_meta_context, Title};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="zoomlens"/>
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; gap: 1rem; padding: 2rem; background: #1a1a1a; color: white;">
            <h1>"zoomlens"</h1>
            <p>"Double-click to zoom in on a point, drag to pan, double-click again to reset."</p>
            <ZoomableImage src="assets/sample.jpg" alt="Sample image"/>
        </div>
    }
}
