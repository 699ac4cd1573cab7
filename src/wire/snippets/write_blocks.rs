/// Write every item as a single counted block, then the terminating empty block.
pub fn write_blocks<W, I, F>(w: &mut W, items: I, mut write_item: F) -> io::Result<()>
where
    W: io::Write + ?Sized,
    I: ExactSizeIterator,
    F: FnMut(I::Item, &mut W) -> io::Result<()>,
{
    if items.len() > 0 {
        encode_int(w, items.len() as i64)?;
        for item in items {
            write_item(item, &mut *w)?;
        }
    }
    encode_int(w, 0)
}
