#[cfg(test)]
mod test {
    use crate::errors::CodecError;
    use crate::serde::{ReadResult, TypeTag, Variant, VariantData};
    use crate::types::{Scalar, Value};
    use anyhow::{anyhow, Result};
    use std::io::Cursor;

    fn roundtrip(var: &Variant) -> Result<Variant> {
        let mut buf = vec![];
        var.ser(&mut buf)?;
        match Variant::deser(&mut Cursor::new(&buf))? {
            ReadResult::EOF => Err(anyhow!("Premature EOF")),
            ReadResult::Some(_, back) => Ok(back),
        }
    }

    #[test]
    fn scalar_shape_law() {
        let var = Variant::scalar(5i32);
        assert_eq!(var.tag(), TypeTag::Int32);
        assert_eq!(var.shape(), &[1]);
        assert!(var.is_scalar());
        assert_eq!(var.value(), Value::Scalar(Scalar::Int32(5)));
        assert_eq!(var.data(), &VariantData::Int32(vec![5]));
    }

    #[test]
    fn list_shape_law() {
        let var = Variant::list(vec![Scalar::UInt16(7), Scalar::UInt16(9)]).unwrap();
        assert_eq!(var.tag(), TypeTag::UInt16);
        assert_eq!(var.shape(), &[2]);
        assert!(!var.is_scalar());
        assert_eq!(
            var.value(),
            Value::List(vec![Scalar::UInt16(7), Scalar::UInt16(9)])
        );
    }

    #[test]
    fn one_element_list_reads_back_as_scalar() {
        // Shape [1] is semantically a scalar, regardless of how it was built.
        let var = Variant::list(vec![Scalar::Bool(true)]).unwrap();
        assert_eq!(var.shape(), &[1]);
        assert_eq!(var.value(), Value::Scalar(Scalar::Bool(true)));
    }

    #[test]
    fn empty_list_rejected() {
        assert!(matches!(Variant::list(vec![]), Err(CodecError::EmptyValue)));
    }

    #[test]
    fn heterogeneous_list_rejected() {
        let res = Variant::list(vec![Scalar::Int64(1), Scalar::Float64(2.0)]);
        assert!(matches!(
            res,
            Err(CodecError::HeterogeneousList {
                first: TypeTag::Int64,
                other: TypeTag::Float64,
            })
        ));
    }

    #[test]
    fn shape_product_must_match() {
        let res = Variant::from_data(VariantData::Int8(vec![1, 2, 3]), vec![2]);
        assert!(matches!(res, Err(CodecError::ShapeMismatch { .. })));
    }

    #[test]
    fn rank_zero_rejected() {
        let res = Variant::from_data(VariantData::Int8(vec![1]), vec![]);
        assert!(matches!(res, Err(CodecError::ShapeMismatch { .. })));
    }

    #[test]
    fn empty_data_rejected() {
        let res = Variant::from_data(VariantData::Int8(vec![]), vec![0]);
        assert!(matches!(res, Err(CodecError::EmptyValue)));
    }

    #[test]
    fn int8_boundaries() -> Result<()> {
        let res = Variant::from_values(TypeTag::Int8, vec![1], vec![Scalar::Int64(128)]);
        assert!(matches!(res, Err(CodecError::OutOfRange { .. })));

        for bound in [-128i64, 127] {
            let var = Variant::from_values(TypeTag::Int8, vec![1], vec![Scalar::Int64(bound)])?;
            let back = roundtrip(&var)?;
            assert_eq!(back.value(), Value::Scalar(Scalar::Int8(bound as i8)));
        }
        Ok(())
    }

    #[test]
    fn integer_bounds_enforced_per_tag() -> Result<()> {
        let cases: [(TypeTag, i128, i128); 8] = [
            (TypeTag::Int8, i8::MIN as i128, i8::MAX as i128),
            (TypeTag::UInt8, 0, u8::MAX as i128),
            (TypeTag::Int16, i16::MIN as i128, i16::MAX as i128),
            (TypeTag::UInt16, 0, u16::MAX as i128),
            (TypeTag::Int32, i32::MIN as i128, i32::MAX as i128),
            (TypeTag::UInt32, 0, u32::MAX as i128),
            (TypeTag::Int64, i64::MIN as i128, i64::MAX as i128),
            (TypeTag::UInt64, 0, u64::MAX as i128),
        ];

        fn scalar_of(v: i128) -> Scalar {
            if v < 0 {
                Scalar::Int64(v as i64)
            } else {
                Scalar::UInt64(v as u64)
            }
        }

        for (tag, min, max) in cases {
            let var =
                Variant::from_values(tag, vec![2], vec![scalar_of(min), scalar_of(max)])?;
            assert_eq!(roundtrip(&var)?, var, "{}", tag);

            // One past each bound, where a native value can express it.
            if min - 1 >= i64::MIN as i128 {
                let res = Variant::from_values(tag, vec![1], vec![scalar_of(min - 1)]);
                assert!(matches!(res, Err(CodecError::OutOfRange { .. })), "{}", tag);
            }
            if max + 1 <= u64::MAX as i128 {
                let res = Variant::from_values(tag, vec![1], vec![scalar_of(max + 1)]);
                assert!(matches!(res, Err(CodecError::OutOfRange { .. })), "{}", tag);
            }
        }
        Ok(())
    }

    #[test]
    fn wrong_kind_value_rejected() {
        let res = Variant::from_values(TypeTag::Int8, vec![1], vec![Scalar::from("nope")]);
        assert!(matches!(res, Err(CodecError::TypeMismatch { .. })));

        let res = Variant::from_values(TypeTag::Bool, vec![1], vec![Scalar::Int64(1)]);
        assert!(matches!(res, Err(CodecError::TypeMismatch { .. })));
    }

    #[test]
    fn float32_narrowing_checked() {
        let res = Variant::from_values(TypeTag::Float32, vec![1], vec![Scalar::Float64(1e300)]);
        assert!(matches!(res, Err(CodecError::OutOfRange { .. })));

        let ok = Variant::from_values(TypeTag::Float32, vec![1], vec![Scalar::Float64(1.5)])
            .unwrap();
        assert_eq!(ok.value(), Value::Scalar(Scalar::Float32(1.5)));
    }

    #[test]
    fn string_fidelity() -> Result<()> {
        let var = Variant::scalar("Hello World, ÄÖÜäöüß");
        let back = roundtrip(&var)?;
        assert_eq!(
            back.value(),
            Value::Scalar(Scalar::from("Hello World, ÄÖÜäöüß"))
        );
        Ok(())
    }
}
