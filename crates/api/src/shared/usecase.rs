use std::fmt::Debug;
use taskflow_infra::TaskflowContext;
use tracing::error;

#[async_trait::async_trait(?Send)]
pub trait UseCase: Debug {
    type Response;
    type Error;

    /// The name of the use case, used for logging
    const NAME: &'static str;

    async fn execute(&mut self, ctx: &TaskflowContext) -> Result<Self::Response, Self::Error>;
}

#[tracing::instrument(name = "Executing usecase", skip(usecase, ctx))]
pub async fn execute<U>(mut usecase: U, ctx: &TaskflowContext) -> Result<U::Response, U::Error>
where
    U: UseCase,
    U::Error: Debug,
{
    let res = usecase.execute(ctx).await;

    if let Err(e) = &res {
        error!("Use case `{}` error: {:?}", U::NAME, e);
    }

    res
}
