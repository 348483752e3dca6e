/// Backing surface size for a window whose drawable area is `width × height`
/// physical pixels.
///
/// The window's physical size already includes the display scale factor, so it
/// is used as-is; each dimension is kept at least 1 since a zero-sized surface
/// cannot be configured.
pub fn surface_extent(width: u32, height: u32) -> (u32, u32) {
    (width.max(1), height.max(1))
}

/// The size to reconfigure the surface to, or `None` when it already matches.
pub fn resize_target(current: (u32, u32), wanted: (u32, u32)) -> Option<(u32, u32)> {
    (current != wanted).then_some(wanted)
}

/// Uniform slot capacity able to hold `needed` draws.
///
/// Keeps `current` while it suffices, otherwise grows to the next power of two.
pub fn slot_capacity(current: u64, needed: u64) -> u64 {
    if needed <= current {
        current
    } else {
        needed.next_power_of_two()
    }
}

/// Preferred MSAA sample count.
pub const MSAA_SAMPLES: u32 = 4;

/// Sample count for the render target: [`MSAA_SAMPLES`] when the surface format
/// supports it, otherwise a single sample.
pub fn msaa_sample_count(supported: bool) -> u32 {
    if supported { MSAA_SAMPLES } else { 1 }
}

/// Round `value` up to the next multiple of `alignment` (a power of two).
pub fn align_to(value: u64, alignment: u64) -> u64 {
    debug_assert!(alignment.is_power_of_two());
    (value + alignment - 1) & !(alignment - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_matches_window_pixels() {
        for w in 1..4000u32 {
            assert_eq!(surface_extent(w, 115), (w, 115));
        }
        assert_eq!(surface_extent(61, 115), (61, 115));
    }

    #[test]
    fn surface_extent_never_zero() {
        assert_eq!(surface_extent(0, 0), (1, 1));
        assert_eq!(surface_extent(0, 720), (1, 720));
    }

    #[test]
    fn resize_only_when_size_changes() {
        assert_eq!(resize_target((800, 600), (800, 600)), None);
        assert_eq!(resize_target((800, 600), (801, 600)), Some((801, 600)));
        assert_eq!(resize_target((800, 600), (800, 599)), Some((800, 599)));
    }

    #[test]
    fn slot_capacity_grows_by_powers_of_two() {
        assert_eq!(slot_capacity(16, 7), 16);
        assert_eq!(slot_capacity(16, 16), 16);
        assert_eq!(slot_capacity(16, 17), 32);
        assert_eq!(slot_capacity(16, 100), 128);
    }

    #[test]
    fn msaa_falls_back_to_single_sample() {
        assert_eq!(msaa_sample_count(true), 4);
        assert_eq!(msaa_sample_count(false), 1);
    }

    #[test]
    fn align_rounds_up() {
        assert_eq!(align_to(32, 256), 256);
        assert_eq!(align_to(256, 256), 256);
        assert_eq!(align_to(257, 256), 512);
        assert_eq!(align_to(0, 64), 0);
    }
}
