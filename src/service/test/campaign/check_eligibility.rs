use super::*;

/// Tests a candidate holding neither role and without a running campaign.
///
/// Expected: Ok
#[tokio::test]
async fn accepts_fresh_candidate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Campaign)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CampaignService::new(db)
        .check_eligibility(&candidate(10), CampaignKind::Regular)
        .await?;

    Ok(())
}

/// Tests that holding the target role is reported before anything else.
///
/// Expected: Err(Rejected) titled "User already promoted"
#[tokio::test]
async fn rejects_member_holding_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Campaign)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::campaign::CampaignFactory::new(db)
        .user_id("10")
        .build()
        .await?;

    let regular = Candidate {
        is_regular: true,
        ..candidate(10)
    };
    let result = CampaignService::new(db)
        .check_eligibility(&regular, CampaignKind::Regular)
        .await;

    assert!(matches!(
        result,
        Err(AppError::Rejected { ref title, ref description })
            if title == "User already promoted"
                && description == "The user is already promoted to regular."
    ));

    Ok(())
}

/// Tests that an associate cannot be voted down to regular.
///
/// Expected: Err(Rejected) titled "User already associate"
#[tokio::test]
async fn rejects_associate_for_regular() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Campaign)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let associate = Candidate {
        is_associate: true,
        ..candidate(10)
    };
    let result = CampaignService::new(db)
        .check_eligibility(&associate, CampaignKind::Regular)
        .await;

    assert!(matches!(
        result,
        Err(AppError::Rejected { ref title, .. }) if title == "User already associate"
    ));

    Ok(())
}

/// Tests a candidate who already has a running campaign.
///
/// Expected: Err(Rejected) titled "User already in campaign"
#[tokio::test]
async fn rejects_running_campaign() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Campaign)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::campaign::CampaignFactory::new(db)
        .user_id("10")
        .kind(CampaignKind::Regular)
        .build()
        .await?;

    let result = CampaignService::new(db)
        .check_eligibility(&candidate(10), CampaignKind::Associate)
        .await;

    assert!(matches!(
        result,
        Err(AppError::Rejected { ref title, .. }) if title == "User already in campaign"
    ));

    Ok(())
}
