// zoomlens-ui/src/hooks/use_zoom_pan.rs
use leptos::html::{Div, Img};
use leptos::*;
use web_sys::{DomRect, MouseEvent, PointerEvent};
use zoomlens_core::{
    Cursor, Mode, PointerInput, Rect, Transform, ViewportGeometry, ZoomConfig, ZoomController,
};

/// Handle returned by the hook: derived state for rendering plus the event
/// callbacks to wire onto the container element.
#[derive(Clone, Copy)]
pub struct ZoomPanHandle {
    pub transform: Memo<Transform>,
    pub cursor: Memo<Cursor>,
    pub magnified: Memo<bool>,
    pub on_double_click: Callback<MouseEvent>,
    pub on_pointer_down: Callback<PointerEvent>,
    pub on_pointer_move: Callback<PointerEvent>,
    pub on_pointer_up: Callback<PointerEvent>,
    pub on_pointer_leave: Callback<PointerEvent>,
}

fn rect_from_dom(rect: &DomRect) -> Rect {
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Resolve the current geometry from the DOM, or `None` before the elements
/// are mounted (events arriving that early no-op in the controller).
///
/// The image extent comes from offsetWidth/offsetHeight rather than its
/// bounding rect: those ignore the CSS transform, so the controller always
/// clamps against the unscaled size on both axes.
fn resolve_geometry(
    container_ref: NodeRef<Div>,
    img_ref: NodeRef<Img>,
) -> Option<ViewportGeometry> {
    let container = container_ref.get_untracked()?;
    let img = img_ref.get_untracked()?;

    let container_rect = rect_from_dom(&container.get_bounding_client_rect());
    let image = Rect::new(
        container_rect.left,
        container_rect.top,
        img.offset_width() as f64,
        img.offset_height() as f64,
    );

    Some(ViewportGeometry {
        container: container_rect,
        image,
    })
}

/// Hook that owns one `ZoomController` per widget instance and bridges DOM
/// pointer events to it. Redundant events never cause a re-render: the
/// controller reports whether the transform changed and the memos dedupe.
pub fn use_zoom_pan(
    container_ref: NodeRef<Div>,
    img_ref: NodeRef<Img>,
    config: ZoomConfig,
) -> ZoomPanHandle {
    let controller = create_rw_signal(ZoomController::new(config));

    let dispatch = move |input: PointerInput| {
        let geometry = resolve_geometry(container_ref, img_ref);
        controller.update(|c| {
            if c.handle(input, geometry.as_ref()) {
                log::debug!("transform updated: {:?}", c.transform());
            }
        });
    };

    let transform = create_memo(move |_| controller.with(|c| c.transform()));
    let cursor = create_memo(move |_| controller.with(|c| c.cursor()));
    let magnified = create_memo(move |_| controller.with(|c| c.mode() == Mode::Magnified));

    ZoomPanHandle {
        transform,
        cursor,
        magnified,
        on_double_click: Callback::new(move |e: MouseEvent| {
            dispatch(PointerInput::DoubleClick {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            })
        }),
        on_pointer_down: Callback::new(move |e: PointerEvent| {
            dispatch(PointerInput::Down {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            })
        }),
        on_pointer_move: Callback::new(move |e: PointerEvent| {
            dispatch(PointerInput::Move {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            })
        }),
        on_pointer_up: Callback::new(move |_| dispatch(PointerInput::Up)),
        on_pointer_leave: Callback::new(move |_| dispatch(PointerInput::Leave)),
    }
}
