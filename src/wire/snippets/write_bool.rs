pub fn write_bool<W: io::Write + ?Sized>(r: &bool, w: &mut W) -> io::Result<()> {
    w.write_byte(u8::from(*r))
}
