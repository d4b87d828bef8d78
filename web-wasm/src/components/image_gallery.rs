//! ポートフォリオ画像カルーセルコンポーネント
//!
//! 状態は `Carousel` が持ち、ここではロック解除タイマーの予約と描画だけを行う。
//! タイマー発火時にコンポーネントが破棄されていれば `try_update` が None を返し、何もしない。

use floating_common::{Carousel, Navigation};
use gloo::console;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;

/// ロックを解除する。破棄済みなら何もせず false
fn release_lock(carousel: RwSignal<Carousel>) -> bool {
    carousel.try_update(|c| c.release_lock()).is_some()
}

/// ロック解除を予約する
fn schedule_release(carousel: RwSignal<Carousel>, navigation: Navigation) {
    let Navigation::Moved {
        release_after: Some(delay),
        ..
    } = navigation
    else {
        return;
    };

    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    Timeout::new(millis, move || {
        if !release_lock(carousel) {
            console::debug!("carousel disposed before lock release; ignored");
        }
    })
    .forget();
}

#[component]
pub fn ImageGallery(carousel: RwSignal<Carousel>) -> impl IntoView {
    let transition_ms = carousel.with_untracked(|c| {
        c.transition().map(|d| d.as_millis()).unwrap_or(0)
    });

    let navigate = move |step: fn(&mut Carousel) -> Navigation| {
        if let Some(navigation) = carousel.try_update(step) {
            schedule_release(carousel, navigation);
        }
    };

    let on_previous = move |_| navigate(Carousel::retreat);
    let on_next = move |_| navigate(Carousel::advance);

    let on_dot = move |index: usize| match carousel.try_update(|c| c.jump_to(index)) {
        Some(Ok(navigation)) => schedule_release(carousel, navigation),
        Some(Err(e)) => console::error!(format!("carousel jump rejected: {}", e)),
        None => {}
    };

    view! {
        <div
            class="carousel"
            class:transitioning=move || carousel.with(|c| c.is_locked())
            style=format!("--carousel-transition: {}ms", transition_ms)
        >
            <div class="carousel-frame">
                <img
                    class="carousel-image"
                    src=move || carousel.with(|c| c.current().source.clone())
                    alt=move || carousel.with(|c| c.current().alt_text.clone())
                />

                <button
                    class="carousel-arrow carousel-arrow-left"
                    aria-label="Previous image"
                    on:click=on_previous
                >
                    "‹"
                </button>
                <button
                    class="carousel-arrow carousel-arrow-right"
                    aria-label="Next image"
                    on:click=on_next
                >
                    "›"
                </button>
            </div>

            <div class="carousel-dots">
                {move || {
                    carousel
                        .with(|c| c.dots())
                        .into_iter()
                        .map(|dot| {
                            view! {
                                <button
                                    class="carousel-dot"
                                    class:active=dot.active
                                    aria-label=format!("Go to image {}", dot.index + 1)
                                    on:click=move |_| on_dot(dot.index)
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="carousel-counter">
                {move || {
                    let (position, total) = carousel.with(|c| c.position());
                    format!("{} / {}", position, total)
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floating_common::{Gallery, DEFAULT_TRANSITION};

    #[test]
    fn test_release_lock_opens_live_carousel() {
        let owner = Owner::new();
        let carousel = owner.with(|| RwSignal::new(Carousel::new(Gallery::default(), DEFAULT_TRANSITION)));
        assert!(carousel.try_update(|c| c.advance()).is_some_and(|n| n.is_moved()));
        assert!(carousel.with_untracked(|c| c.is_locked()));

        assert!(release_lock(carousel));
        assert!(!carousel.with_untracked(|c| c.is_locked()));
    }

    #[test]
    fn test_release_lock_after_dispose_is_noop() {
        let owner = Owner::new();
        let carousel = owner.with(|| RwSignal::new(Carousel::new(Gallery::default(), DEFAULT_TRANSITION)));
        let navigation = carousel.try_update(|c| c.advance());
        assert!(matches!(navigation, Some(Navigation::Moved { index: 1, .. })));

        drop(owner);

        // 破棄後のタイマー発火
        assert!(!release_lock(carousel));
        assert!(carousel.try_update(|c| c.release_lock()).is_none());
    }
}
