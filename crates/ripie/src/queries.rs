//! GraphQL documents sent to rip.ie, pinned to the schema the site uses

/// Counties matching a filter input
pub const COUNTIES_FOR_FILTERS: &str = r#"query getCountiesForFilters($input: FilterInputGraphql!) {
  getCountiesForFilters(input: $input) {
    total
    records {
      id
      name
    }
  }
}
"#;

/// Towns in a county matching a filter input
pub const TOWNS_FOR_FILTERS: &str = r#"query getTownsForFilters($countyId: Float!, $input: FilterInputGraphql!) {
  getTownsForFilters(countyId: $countyId, input: $input) {
    total
    records {
      id
      name
    }
  }
}
"#;

/// One page of death notices for the list view, without photos
pub const SEARCH_DEATH_NOTICES: &str = r#"query searchDeathNoticesForListTableWithoutPhoto($list: ListInput!, $isTiledView: Boolean!) {
  searchDeathNoticesForList(query: $list, isTiledView: $isTiledView) {
    count
    perPage
    page
    nextPage
    records {
      id
      firstname
      surname
      nee
      createdAt
      funeralArrangementsLater
      arrangementsChange
      county {
        id
        name
      }
      town {
        id
        name
      }
    }
  }
}
"#;

/// Funeral director, funeral home and locations for a notice
pub const DEATH_NOTICE_FD_INFO: &str = r#"query getDeathNoticeFDInfo($deathNoticeId: Float!) {
  previewDeathNotice(deathNoticeId: $deathNoticeId) {
    locations {
      id
      type
      name
      latitude
      longitude
      town {
        id
        name
      }
    }
    funeralHome {
      id
      name
      addressFirstPart
      addressSecondPart
      addressThirdPart
      city
      mapUrl
      websiteUrl
      email
      phone
      mobilePhone
      county {
        id
        name
      }
      funeralHomeAds {
        topBannerAttachment {
          id
          name
          file
        }
        topBannerUrl
        secondTopBannerAttachment {
          id
          name
          file
        }
        secondTopBannerUrl
        sideTopBannerAttachment {
          id
          name
          file
        }
        sideTopBannerUrl
        sideMiddleBannerAttachment {
          id
          name
          file
        }
        sideMiddleBannerUrl
        sideBottomBannerAttachment {
          id
          name
          file
        }
        sideBottomBannerUrl
      }
      funeralDirector {
        advertisePlaces
        isIafd
        strapline
      }
    }
  }
}
"#;

/// Every county
pub const COUNTIES: &str = r#"query getCounties {
  getCounties {
    id
    name
  }
}
"#;

/// A single notice with its locations and funeral home
pub const DEATH_NOTICE_FULL: &str = r#"query getDeathNoticeFull($deathNoticeId: Float!) {
  previewDeathNotice(deathNoticeId: $deathNoticeId) {
    id
    firstname
    surname
    nee
    createdAt
    funeralArrangementsLater
    arrangementsChange
    county {
      id
      name
    }
    town {
      id
      name
    }
    locations {
      id
      type
      name
      latitude
      longitude
      town {
        id
        name
      }
    }
    funeralHome {
      id
      name
      addressFirstPart
      addressSecondPart
      addressThirdPart
      city
      mapUrl
      websiteUrl
      email
      phone
      mobilePhone
      county {
        id
        name
      }
    }
  }
}
"#;
