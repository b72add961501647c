/// Generates `new` for a client wrapping a `ResourceClient`.
macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: $crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

/// Generates `get_<x>`, `get_all_<x>s` and `delete_<x>`. Every record read
/// goes through `$normalize` so callers never see legacy prices.
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $id:ty, $error:ty, $entity_name_snake:ident, normalize = $normalize:path) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](&self, id: $id) -> Result<Option<$entity>, $error> {
                    tracing::debug!("Sending request");
                    Ok(self.inner.get(id).await?.map($normalize))
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<get_all_ $entity_name_snake s>](&self) -> Result<Vec<$entity>, $error> {
                    tracing::debug!("Sending request");
                    Ok(self.inner.list().await?.into_iter().map($normalize).collect())
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<delete_ $entity_name_snake>](&self, id: $id) -> Result<(), $error> {
                    tracing::debug!("Sending request");
                    Ok(self.inner.delete(id).await?)
                }
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $id:ty, $error:ty, $entity_name_snake:ident, normalize = $normalize:path) => {
        impl_client_new!($client_name, $entity);
        impl_client_methods!($client_name, $entity, $id, $error, $entity_name_snake, normalize = $normalize);
    };
}
