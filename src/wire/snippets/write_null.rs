pub fn write_null<W: io::Write + ?Sized>(_r: &(), _w: &mut W) -> io::Result<()> {
    Ok(())
}
