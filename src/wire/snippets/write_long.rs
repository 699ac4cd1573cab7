pub fn write_long<W: io::Write + ?Sized>(r: &i64, w: &mut W) -> io::Result<()> {
    encode_int(w, *r)
}
