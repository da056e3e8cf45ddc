//! Peak detection stage of the step counting pipeline

/// Minimum derivative value for a local maximum to count as a step
pub const THRESHOLD: i32 = 50;

/// Count strict local maxima above [`THRESHOLD`] in the derivative signal
///
/// Index `i` counts as a step when `signal[i]` is strictly greater than
/// both neighbours and strictly greater than the threshold. The first and
/// last samples have only one neighbour and are never examined, so a peak
/// on the window boundary is never counted.
///
/// Ties never qualify: two adjacent equal high points reject each other
/// because neither strictly dominates. There is no minimum-distance rule
/// between peaks, so two back-to-back qualifying indices both count even
/// when they belong to the same physical step.
///
/// The count wraps at 256 like the 8-bit register it models; realistic
/// window sizes keep it far below that.
pub fn detect_peaks(signal: &[i32]) -> u8 {
    let mut count: u8 = 0;

    for i in 1..signal.len().saturating_sub(1) {
        if signal[i] > signal[i - 1] && signal[i] > signal[i + 1] && signal[i] > THRESHOLD {
            count = count.wrapping_add(1);
        }
    }

    count
}
