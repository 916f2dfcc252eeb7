/// Borrows the first `N` bytes of `slice` as an array, if it is long enough.
pub(crate) fn ref_array_start<const N: usize>(slice: &[u8]) -> Option<&[u8; N]> {
    slice.get(..N).and_then(|s| s.try_into().ok())
}

/// Mutably borrows the first `N` bytes of `slice` as an array, if it is long enough.
pub(crate) fn mut_array_start<const N: usize>(slice: &mut [u8]) -> Option<&mut [u8; N]> {
    slice.get_mut(..N).and_then(|s| s.try_into().ok())
}
