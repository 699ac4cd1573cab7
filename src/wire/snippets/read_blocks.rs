/// Read counted blocks until the empty block, calling `read_item` once per item.
///
/// A negative count is followed by the block's size in bytes, which is skipped.
/// At most `i32::MAX` items are read in total, which also bounds the loop for
/// items that take no bytes on the wire (`null`, empty records).
pub fn read_blocks<R, F>(r: &mut R, mut read_item: F) -> Result<(), DecodeError>
where
    R: io::Read + ?Sized,
    F: FnMut(&mut R) -> Result<(), DecodeError>,
{
    const MAX_ITEMS: i64 = i32::MAX as i64;
    let mut total: i64 = 0;
    loop {
        let mut count = decode_int(r)?;
        if count == 0 {
            return Ok(());
        }
        if count < 0 {
            decode_int(r)?;
            count = count.checked_neg().ok_or(DecodeError::NegativeLength(count))?;
        }
        total = total.saturating_add(count);
        if total > MAX_ITEMS {
            return Err(DecodeError::TooManyItems(total));
        }
        for _ in 0..count {
            read_item(&mut *r)?;
        }
    }
}
