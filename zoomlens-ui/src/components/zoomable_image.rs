// zoomlens-ui/src/components/zoomable_image.rs
use crate::hooks::use_zoom_pan;
use leptos::*;
use zoomlens_core::ZoomConfig;

// The container clips the transformed image; touch-action none keeps pointer
// events flowing during a drag on touch devices.
const CONTAINER_STYLE: &str =
    "position: relative; overflow: hidden; touch-action: none; user-select: none;";

/// Single-image zoom-and-pan widget.
///
/// Double-click (or double-tap) toggles between the fitted view and a view
/// magnified around the click point; while magnified, dragging pans the
/// visible region. The transform and cursor affordance are derived from the
/// controller in `zoomlens-core` and applied as inline style on the image.
#[component]
pub fn ZoomableImage(
    /// Image resource locator
    #[prop(into)] src: String,
    /// Accessibility text
    #[prop(into)] alt: String,
    /// Zoom level a double-click magnifies to
    #[prop(default = ZoomConfig::DEFAULT_ZOOM_FACTOR)] zoom_factor: f64,
    /// Base scale of the fitted view
    #[prop(default = ZoomConfig::DEFAULT_MIN_ZOOM)] min_zoom: f64,
    /// Upper zoom limit
    #[prop(default = ZoomConfig::DEFAULT_MAX_ZOOM)] max_zoom: f64,
) -> impl IntoView {
    let container_ref = create_node_ref::<html::Div>();
    let img_ref = create_node_ref::<html::Img>();

    let zoom_pan = use_zoom_pan(
        container_ref,
        img_ref,
        ZoomConfig::new(zoom_factor, min_zoom, max_zoom),
    );

    let img_style = move || {
        format!(
            "transform: {}; transform-origin: 0 0; cursor: {};",
            zoom_pan.transform.get().css(),
            zoom_pan.cursor.get().as_css()
        )
    };

    view! {
        <div
            node_ref=container_ref
            class="zoomable-image-container"
            class=("zoomed-in", move || zoom_pan.magnified.get())
            style=CONTAINER_STYLE
            on:dblclick=move |e| zoom_pan.on_double_click.call(e)
            on:pointerdown=move |e| zoom_pan.on_pointer_down.call(e)
            on:pointermove=move |e| zoom_pan.on_pointer_move.call(e)
            on:pointerup=move |e| zoom_pan.on_pointer_up.call(e)
            on:pointerleave=move |e| zoom_pan.on_pointer_leave.call(e)
        >
            <img
                node_ref=img_ref
                class="zoomable-image"
                src=src
                alt=alt
                style=img_style
                draggable="false"
            />
        </div>
    }
}
