//! Pointer tracking for the header highlight.
//!
//! The tracker listens for pointer moves on an element and mirrors the
//! cursor position, relative to the element's top-left corner, into the
//! `--spec-x` / `--spec-y` custom properties that the stylesheet gradients
//! read. The browser binding lives at the bottom of this file; everything
//! above it is plain Rust so it can run without a DOM.

use crate::error::TrackerError;

pub const SPEC_X_PROPERTY: &str = "--spec-x";
pub const SPEC_Y_PROPERTY: &str = "--spec-y";
pub const MOVE_EVENT: &str = "mousemove";

/// Viewport coordinates reported by a move event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClientPoint {
    pub x: f64,
    pub y: f64,
}

/// Top-left corner of an element's bounding box, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Origin {
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    /// Offset of `point` from `origin`. Not clamped to the element bounds.
    pub fn between(origin: Origin, point: ClientPoint) -> Self {
        Self {
            x: point.x - origin.left,
            y: point.y - origin.top,
        }
    }

    pub fn custom_properties(&self) -> [(&'static str, String); 2] {
        [
            (SPEC_X_PROPERTY, format!("{}px", self.x)),
            (SPEC_Y_PROPERTY, format!("{}px", self.y)),
        ]
    }
}

/// An element whose geometry can be read and whose inline style accepts
/// custom properties.
pub trait TrackedSurface {
    /// Current origin. Read on every event so scrolling and resizing are
    /// picked up.
    fn origin(&self) -> Origin;

    fn set_custom_property(&self, name: &'static str, value: &str) -> Result<(), TrackerError>;
}

/// Something that delivers pointer moves to a handler until the returned
/// subscription is released.
pub trait MoveSource {
    fn subscribe(
        &self,
        handler: Box<dyn FnMut(ClientPoint)>,
    ) -> Result<Subscription, TrackerError>;
}

/// Scoped listener registration. The release hook runs exactly once, either
/// through [`Subscription::release`] or on drop.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Computes the offset of `point` against the surface's current origin and
/// writes it to the surface.
pub fn publish_offset<S>(surface: &S, point: ClientPoint) -> Result<PointerOffset, TrackerError>
where
    S: TrackedSurface + ?Sized,
{
    let offset = PointerOffset::between(surface.origin(), point);
    for (name, value) in offset.custom_properties() {
        surface.set_custom_property(name, &value)?;
    }
    Ok(offset)
}

/// Starts mirroring pointer moves on `element` into its custom properties.
/// Tracking stops when the returned subscription is dropped.
pub fn track_pointer<E>(element: &E) -> Result<Subscription, TrackerError>
where
    E: TrackedSurface + MoveSource + Clone + 'static,
{
    let surface = element.clone();
    element.subscribe(Box::new(move |point| {
        if let Err(err) = publish_offset(&surface, point) {
            tracing::warn!(error = %err, "failed to publish pointer offset");
        }
    }))
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
mod web {
    use super::*;
    use web_sys::HtmlElement;
    use web_sys::wasm_bindgen::JsCast;
    use web_sys::wasm_bindgen::closure::Closure;

    impl TrackedSurface for HtmlElement {
        fn origin(&self) -> Origin {
            let rect = self.get_bounding_client_rect();
            Origin {
                left: rect.left(),
                top: rect.top(),
            }
        }

        fn set_custom_property(
            &self,
            name: &'static str,
            value: &str,
        ) -> Result<(), TrackerError> {
            self.style()
                .set_property(name, value)
                .map_err(|err| TrackerError::PropertyRejected {
                    property: name,
                    reason: format!("{err:?}"),
                })
        }
    }

    impl MoveSource for HtmlElement {
        fn subscribe(
            &self,
            mut handler: Box<dyn FnMut(ClientPoint)>,
        ) -> Result<Subscription, TrackerError> {
            let callback = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
                move |ev: web_sys::MouseEvent| {
                    handler(ClientPoint {
                        x: ev.client_x() as f64,
                        y: ev.client_y() as f64,
                    });
                },
            );

            self.add_event_listener_with_callback(MOVE_EVENT, callback.as_ref().unchecked_ref())
                .map_err(|err| TrackerError::Listen {
                    event: MOVE_EVENT,
                    reason: format!("{err:?}"),
                })?;

            let target = self.clone();
            Ok(Subscription::new(move || {
                let _ = target.remove_event_listener_with_callback(
                    MOVE_EVENT,
                    callback.as_ref().unchecked_ref(),
                );
                drop(callback);
            }))
        }
    }
}
