//! カルーセル状態機械
//!
//! 画像を1枚ずつ表示し、前後移動とドットによる直接選択を扱う。
//! 遷移ロックが有効な場合、インデックス変更後は一定時間すべての移動を無視する。
//! ロック解除のタイマーは呼び出し側（描画層）が `Navigation::Moved` の
//! `release_after` に従って予約し、発火時に `release_lock` を呼ぶ。

use crate::error::{Error, Result};
use crate::gallery::{Gallery, ImageDescriptor};
use std::time::Duration;

/// 既定の遷移時間（CSSトランジションと一致させる）
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(500);

/// カルーセルの状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub current_index: usize,
    pub transition_lock: bool,
}

/// 移動操作の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// インデックスが変わった。`release_after` が Some ならその時間後にロック解除を予約する
    Moved {
        index: usize,
        release_after: Option<Duration>,
    },
    /// ロック中、または同じインデックスへの移動
    Ignored,
}

impl Navigation {
    pub fn is_moved(&self) -> bool {
        matches!(self, Navigation::Moved { .. })
    }
}

/// インジケータ1個分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

/// カルーセルコントローラ
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    gallery: Gallery,
    state: CarouselState,
    /// None ならロックなし
    transition: Option<Duration>,
}

impl Carousel {
    /// ロック付きで作成
    pub fn new(gallery: Gallery, transition: Duration) -> Self {
        Self::with_transition(gallery, Some(transition))
    }

    /// ロックなしで作成
    pub fn unlocked(gallery: Gallery) -> Self {
        Self::with_transition(gallery, None)
    }

    /// `Duration::ZERO` はロックなしとして扱う
    pub fn with_transition(gallery: Gallery, transition: Option<Duration>) -> Self {
        Self {
            gallery,
            state: CarouselState::default(),
            transition: transition.filter(|d| !d.is_zero()),
        }
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_locked(&self) -> bool {
        self.state.transition_lock
    }

    pub fn transition(&self) -> Option<Duration> {
        self.transition
    }

    pub fn len(&self) -> usize {
        self.gallery.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gallery.is_empty()
    }

    /// 次の画像へ（末尾から先頭へ折り返す）
    pub fn advance(&mut self) -> Navigation {
        let next = (self.state.current_index + 1) % self.len();
        self.move_to(next)
    }

    /// 前の画像へ（先頭から末尾へ折り返す）
    pub fn retreat(&mut self) -> Navigation {
        let len = self.len();
        let prev = (self.state.current_index + len - 1) % len;
        self.move_to(prev)
    }

    /// 指定インデックスへ移動
    ///
    /// 範囲外はエラー（丸めない）。ロック中・同一インデックスは `Ignored`。
    pub fn jump_to(&mut self, index: usize) -> Result<Navigation> {
        if index >= self.len() {
            return Err(Error::InvalidIndex {
                index,
                len: self.len(),
            });
        }
        if index == self.state.current_index {
            return Ok(Navigation::Ignored);
        }
        Ok(self.move_to(index))
    }

    /// ロック解除（タイマー発火時）
    ///
    /// 予約が重なっていても、どれか1つが発火した時点でロックは開く。
    pub fn release_lock(&mut self) {
        self.state.transition_lock = false;
    }

    fn move_to(&mut self, index: usize) -> Navigation {
        if self.state.transition_lock {
            return Navigation::Ignored;
        }
        self.state.current_index = index;
        if self.transition.is_some() {
            self.state.transition_lock = true;
        }
        Navigation::Moved {
            index,
            release_after: self.transition,
        }
    }

    /// 表示中の画像
    pub fn current(&self) -> &ImageDescriptor {
        &self.gallery.images()[self.state.current_index]
    }

    /// 表示用の (1始まりの位置, 総数)
    pub fn position(&self) -> (usize, usize) {
        (self.state.current_index + 1, self.len())
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.state.current_index
    }

    /// ドットインジケータ
    pub fn dots(&self) -> Vec<Dot> {
        (0..self.len())
            .map(|index| Dot {
                index,
                active: self.is_active(index),
            })
            .collect()
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> Gallery {
        let images = (0..n)
            .map(|i| ImageDescriptor::new(format!("/images/{}.jpg", i), format!("image {}", i)))
            .collect();
        Gallery::new(images).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let carousel = Carousel::new(gallery(3), DEFAULT_TRANSITION);
        assert_eq!(carousel.state(), CarouselState { current_index: 0, transition_lock: false });
        assert_eq!(carousel.position(), (1, 3));
    }

    #[test]
    fn test_advance_sets_lock_and_reports_release() {
        let mut carousel = Carousel::new(gallery(3), DEFAULT_TRANSITION);
        let nav = carousel.advance();
        assert_eq!(
            nav,
            Navigation::Moved { index: 1, release_after: Some(DEFAULT_TRANSITION) }
        );
        assert!(carousel.is_locked());
    }

    #[test]
    fn test_locked_navigation_ignored() {
        let mut carousel = Carousel::new(gallery(4), DEFAULT_TRANSITION);
        carousel.advance();
        assert_eq!(carousel.advance(), Navigation::Ignored);
        assert_eq!(carousel.retreat(), Navigation::Ignored);
        assert_eq!(carousel.jump_to(3).unwrap(), Navigation::Ignored);
        assert_eq!(carousel.current_index(), 1);

        carousel.release_lock();
        assert!(carousel.advance().is_moved());
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut carousel = Carousel::new(gallery(2), DEFAULT_TRANSITION);
        carousel.advance();
        carousel.release_lock();
        carousel.release_lock();
        assert!(!carousel.is_locked());
    }

    #[test]
    fn test_unlocked_carousel_never_locks() {
        let mut carousel = Carousel::unlocked(gallery(3));
        assert_eq!(carousel.advance(), Navigation::Moved { index: 1, release_after: None });
        assert!(!carousel.is_locked());
        assert!(carousel.advance().is_moved());
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_zero_transition_means_no_lock() {
        let carousel = Carousel::with_transition(gallery(3), Some(Duration::ZERO));
        assert_eq!(carousel.transition(), None);
    }

    #[test]
    fn test_jump_to_same_index_does_not_lock() {
        let mut carousel = Carousel::new(gallery(3), DEFAULT_TRANSITION);
        assert_eq!(carousel.jump_to(0).unwrap(), Navigation::Ignored);
        assert!(!carousel.is_locked());
    }

    #[test]
    fn test_jump_to_out_of_range() {
        let mut carousel = Carousel::new(gallery(3), DEFAULT_TRANSITION);
        let err = carousel.jump_to(3).unwrap_err();
        assert!(matches!(err, Error::InvalidIndex { index: 3, len: 3 }));
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_locked());
    }

    #[test]
    fn test_single_image_wraps_onto_itself() {
        let mut carousel = Carousel::unlocked(gallery(1));
        assert_eq!(carousel.advance(), Navigation::Moved { index: 0, release_after: None });
        assert_eq!(carousel.retreat(), Navigation::Moved { index: 0, release_after: None });
    }

    #[test]
    fn test_dots_mark_active() {
        let mut carousel = Carousel::unlocked(gallery(3));
        carousel.jump_to(2).unwrap();
        let active: Vec<bool> = carousel.dots().iter().map(|d| d.active).collect();
        assert_eq!(active, vec![false, false, true]);
        assert_eq!(carousel.current().source, "/images/2.jpg");
        assert_eq!(carousel.position(), (3, 3));
    }
}
