pub fn write_int<W: io::Write + ?Sized>(r: &i32, w: &mut W) -> io::Result<()> {
    encode_int(w, i64::from(*r))
}
