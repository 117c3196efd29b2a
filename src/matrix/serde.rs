use serde::{
    de::{Error, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};

use super::Matrix;

struct MatrixVisitor<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<'de, T> Visitor<'de> for MatrixVisitor<T>
where
    T: Deserialize<'de> + Clone,
{
    type Value = Matrix<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of equally long rows")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut rows: Vec<Vec<T>> = vec![];
        while let Some(row) = seq.next_element::<Vec<T>>()? {
            rows.push(row);
        }
        Matrix::try_from_rows(&rows).map_err(A::Error::custom)
    }
}

impl<'de, T> Deserialize<'de> for Matrix<T>
where
    T: Deserialize<'de> + Clone,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(MatrixVisitor {
            _phantom: std::marker::PhantomData,
        })
    }
}

impl<T> Serialize for Matrix<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.num_rows()))?;
        for row in self.rows_iter() {
            seq.serialize_element(&row.collect::<Vec<_>>())?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::Value;

    use super::*;

    #[test]
    fn test_deserialize_rows() {
        let matrix: Matrix<Value> = serde_json::from_str("[[1, 2], [3, 4]]").unwrap();
        assert_eq!(Matrix::from_elements(&[1, 2, 3, 4], 2, 2), matrix);
    }

    #[test]
    fn test_deserialize_ragged_rows_fails() {
        let result: std::result::Result<Matrix<Value>, _> =
            serde_json::from_str("[[1, 2], [3]]");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_rows() {
        let matrix: Matrix<Value> = Matrix::from_elements(&[1, 2, 3, 4, 5, 6], 2, 3);
        assert_eq!("[[1,2,3],[4,5,6]]", serde_json::to_string(&matrix).unwrap());
    }
}
