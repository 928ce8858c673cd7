#[cfg(test)]
mod test {
    use crate::errors::CodecError;
    use crate::stream::Bytes;
    use anyhow::Result;

    #[test]
    fn bad_encoding_is_reported_and_recoverable() -> Result<()> {
        let mut b = Bytes::new();
        b.set(true)?;

        let res = b.get::<f32>();
        assert!(matches!(res, Err(CodecError::TypeMismatch { .. })));

        // The mismatch left the cursor in place.
        assert!(b.get::<bool>()?);
        Ok(())
    }

    #[test]
    fn roundtrips_through_export() -> Result<()> {
        let mut b = Bytes::new();
        b.set(42i8)?;

        let mut b = Bytes::from_bytes(b.to_bytes());
        assert_eq!(b.get::<i8>()?, 42);
        Ok(())
    }

    #[test]
    fn integer_boundaries() -> Result<()> {
        let mut b = Bytes::new();
        b.set(i8::MIN)?;
        b.set(i8::MAX)?;
        b.set(u8::MAX)?;
        b.set(i16::MIN)?;
        b.set(i16::MAX)?;
        b.set(u16::MAX)?;
        b.set(i32::MIN)?;
        b.set(i32::MAX)?;
        b.set(u32::MAX)?;
        b.set(i64::MIN)?;
        b.set(i64::MAX)?;
        b.set(u64::MAX)?;

        assert_eq!(b.get::<i8>()?, i8::MIN);
        assert_eq!(b.get::<i8>()?, i8::MAX);
        assert_eq!(b.get::<u8>()?, u8::MAX);
        assert_eq!(b.get::<i16>()?, i16::MIN);
        assert_eq!(b.get::<i16>()?, i16::MAX);
        assert_eq!(b.get::<u16>()?, u16::MAX);
        assert_eq!(b.get::<i32>()?, i32::MIN);
        assert_eq!(b.get::<i32>()?, i32::MAX);
        assert_eq!(b.get::<u32>()?, u32::MAX);
        assert_eq!(b.get::<i64>()?, i64::MIN);
        assert_eq!(b.get::<i64>()?, i64::MAX);
        assert_eq!(b.get::<u64>()?, u64::MAX);
        Ok(())
    }

    #[test]
    fn floats_and_strings() -> Result<()> {
        let mut b = Bytes::new();
        b.set(1.125f32)?;
        b.set(1.123456f64)?;
        b.set(String::from("Hello World, ÄÖÜäöüß"))?;

        assert_eq!(b.get::<f32>()?, 1.125);
        assert_eq!(b.get::<f64>()?, 1.123456);
        assert_eq!(b.get::<String>()?, "Hello World, ÄÖÜäöüß");
        Ok(())
    }

    #[test]
    fn vector_fields() -> Result<()> {
        let mut b = Bytes::new();
        b.set_vec(&[1i32, 2, 3, 4, 5])?;
        b.set_vec(&[String::from("Hello"), String::from("World")])?;
        b.set_vec::<u8>(&[])?;

        assert_eq!(b.get_vec::<i32>()?, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            b.get_vec::<String>()?,
            vec![String::from("Hello"), String::from("World")]
        );
        assert_eq!(b.get_vec::<u8>()?, Vec::<u8>::new());
        Ok(())
    }

    #[test]
    fn form_mismatch_detected() -> Result<()> {
        let mut b = Bytes::new();
        b.set(1i32)?;
        assert!(matches!(
            b.get_vec::<i32>(),
            Err(CodecError::TypeMismatch { .. })
        ));

        let mut b = Bytes::new();
        b.set_vec(&[1i32])?;
        assert!(matches!(b.get::<i32>(), Err(CodecError::TypeMismatch { .. })));
        Ok(())
    }

    #[test]
    fn reconstructed_stream_rejects_writes() {
        let mut b = Bytes::from_bytes(vec![]);
        assert!(matches!(b.set(1u8), Err(CodecError::ReadOnlyStream)));
        assert!(matches!(
            b.set_vec(&[1u8]),
            Err(CodecError::ReadOnlyStream)
        ));
    }

    #[test]
    fn cursor_overrun_is_underflow() -> Result<()> {
        let mut b = Bytes::new();
        b.set(true)?;
        b.get::<bool>()?;
        assert!(matches!(
            b.get::<bool>(),
            Err(CodecError::BufferUnderflow(_))
        ));
        Ok(())
    }

    #[test]
    fn to_bytes_ignores_cursor() -> Result<()> {
        let mut b = Bytes::new();
        b.set(1u8)?;
        b.set(2u8)?;
        let full = b.to_bytes();
        b.get::<u8>()?;
        assert_eq!(b.to_bytes(), full);
        Ok(())
    }
}
